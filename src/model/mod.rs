//! The semantic model: tables, columns, measures, functions.
//!
//! A model is immutable once published. Updates build a whole new
//! [`SemanticModel`] and swap it into the [`ModelStore`]; nothing is ever
//! mutated in place, so a request always reads one consistent snapshot.

pub mod function;
pub mod store;
pub mod table;

pub use function::Function;
pub use store::ModelStore;
pub use table::{Column, ColumnKind, Table};

/// An immutable snapshot of the metadata the intelligence surface reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SemanticModel {
    tables: Vec<Table>,
    functions: Vec<Function>,
}

impl SemanticModel {
    /// Build a snapshot. Table names are unique case-insensitively; a
    /// duplicate keeps the first occurrence and the rest are discarded.
    pub fn new(tables: Vec<Table>, functions: Vec<Function>) -> Self {
        let mut deduped: Vec<Table> = Vec::with_capacity(tables.len());
        for table in tables {
            let exists = deduped
                .iter()
                .any(|t| t.name.eq_ignore_ascii_case(&table.name));
            if !exists {
                deduped.push(table);
            }
        }
        Self {
            tables: deduped,
            functions,
        }
    }

    /// The empty-model sentinel used before any `setModel` arrives.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tables in declaration order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Functions in declaration order.
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Case-insensitive table lookup.
    pub fn find_table(&self, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive function lookup.
    pub fn find_function(&self, name: &str) -> Option<&Function> {
        self.functions
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// All measures across all tables, in table order then declaration order.
    pub fn measures(&self) -> impl Iterator<Item = &Column> {
        self.tables
            .iter()
            .flat_map(|t| t.members_of_kind(ColumnKind::Measure))
    }
}
