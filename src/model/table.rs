//! Semantic entities: tables, columns, measures.

/// Discriminates plain columns from measures.
///
/// Measures share column storage and lookup semantics but render and sort
/// differently, so they live in the same collection with a kind tag rather
/// than a parallel structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Column,
    Measure,
}

/// A column or measure belonging to a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    /// Display caption (falls back to the name when empty).
    pub caption: String,
    pub description: String,
    /// Data-type tag as reported by the model source ("Decimal", "DateTime", ...).
    pub data_type: String,
    /// Hidden members are kept out of completion output.
    pub hidden: bool,
    /// Owning table name. Back-reference only, not an ownership pointer.
    pub table: String,
    pub kind: ColumnKind,
}

impl Column {
    /// Bracketed, insert-ready form used as the completion label: `[Amount]`.
    pub fn bracketed_name(&self) -> String {
        format!("[{}]", self.name)
    }
}

/// A table in the semantic model.
///
/// Identity is `name`; caption and description are display-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub caption: String,
    pub description: String,
    /// Columns and measures in declaration order.
    pub columns: Vec<Column>,
}

impl Table {
    /// Quoted display form used in table-position completions: `'Sales'`.
    pub fn quoted_name(&self) -> String {
        format!("'{}'", self.name)
    }

    /// Case-insensitive column lookup (columns and measures alike).
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Members of the given kind, in declaration order.
    pub fn members_of_kind(&self, kind: ColumnKind) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(move |c| c.kind == kind)
    }
}
