//! Hover resolution.
//!
//! Resolution order follows the context: a table slot tries tables first,
//! a column slot tries the in-scope table's members first, and anything
//! left falls through to the function catalog. No match is an absent
//! hover, never an error.

use crate::analysis::{parse_line, word_at, LineContext};
use crate::model::{Column, ColumnKind, Function, SemanticModel, Table};
use crate::protocol::{HoverResponse, Position, Range};

/// Resolve hover for the cursor position on `line`.
///
/// `line_offset` locates the line inside the larger document and is handed
/// to the context resolver; `line_index` positions the returned range in
/// document space. The range itself spans the word at the cursor
/// regardless of what matched.
pub fn resolve_hover(
    line: &str,
    column: usize,
    line_offset: usize,
    line_index: u32,
    model: &SemanticModel,
) -> HoverResponse {
    let Some(span) = word_at(line, column) else {
        return HoverResponse::default();
    };

    let parsed = parse_line(line, column, line_offset);
    let Some(contents) = resolve(&parsed.context, &span.text, model) else {
        return HoverResponse::default();
    };

    let range = Range::new(
        Position {
            line: line_index,
            character: span.start as u32,
        },
        Position {
            line: line_index,
            character: span.end as u32,
        },
    );

    HoverResponse {
        contents: Some(contents),
        range: Some(range),
    }
}

/// Markdown for the word under the cursor, or `None` when nothing matches.
pub fn resolve(context: &LineContext, word: &str, model: &SemanticModel) -> Option<String> {
    if word.is_empty() {
        return None;
    }

    match context {
        LineContext::TableExpected => {
            if let Some(table) = model.find_table(word) {
                return Some(format_table(table));
            }
        }
        LineContext::ColumnExpected { table } => {
            if let Some(column) = model.find_table(table).and_then(|t| t.find_column(word)) {
                return Some(format_column(column));
            }
        }
        LineContext::Default => {}
    }

    model.find_function(word).map(format_function)
}

fn format_table(table: &Table) -> String {
    let mut lines = vec![format!("**{}** *table*", table.quoted_name()), "---".to_string()];

    if !table.caption.is_empty() && table.caption != table.name {
        lines.push(format!("**Caption:** {}", table.caption));
    }

    let columns: Vec<_> = table
        .members_of_kind(ColumnKind::Column)
        .map(|c| c.bracketed_name())
        .collect();
    if !columns.is_empty() {
        lines.push(format!("**Columns:** {}", columns.join(", ")));
    }

    if !table.description.is_empty() {
        lines.push(String::new());
        lines.push(table.description.clone());
    }

    lines.join("\n")
}

fn format_column(column: &Column) -> String {
    let kind = match column.kind {
        ColumnKind::Column => "column",
        ColumnKind::Measure => "measure",
    };

    let mut lines = vec![
        format!(
            "**'{}'{}** *{}*",
            column.table,
            column.bracketed_name(),
            kind
        ),
        "---".to_string(),
    ];

    if !column.data_type.is_empty() {
        lines.push(format!("**Type:** {}", column.data_type));
    }

    if !column.description.is_empty() {
        lines.push(String::new());
        lines.push(column.description.clone());
    }

    lines.join("\n")
}

fn format_function(func: &Function) -> String {
    let category = if func.category.is_empty() {
        "function".to_string()
    } else {
        func.category.to_lowercase()
    };

    let mut lines = vec![format!("**{}** *({})*", func.name, category), "---".to_string()];

    if !func.syntax.is_empty() {
        lines.push(format!("`{}`", func.syntax));
    }

    if !func.description.is_empty() {
        lines.push(String::new());
        lines.push(func.description.clone());
    }

    lines.join("\n")
}
