//! Completion assembly.
//!
//! Turns (context, model snapshot) into an ordered list of completion
//! items. Output is deterministic: within a tier, items follow model
//! declaration order, and the assembler never filters by the typed
//! prefix; that is the consuming editor's job against `filterText`.

use crate::analysis::LineContext;
use crate::model::{Column, ColumnKind, Function, SemanticModel, Table};
use crate::protocol::{CompletionItem, CompletionKind, CompletionResponse};

/// Sort tiers, ascending. Lexically lower sorts first.
pub const TIER_MEMBER: &str = "050";
pub const TIER_ENTITY: &str = "100";
pub const TIER_KEYWORD: &str = "200";

/// Static query keywords. Hand-maintained and independent of the model.
pub const KEYWORDS: &[&str] = &["EVALUATE", "DEFINE", "MEASURE", "ORDER BY", "ASC", "DESC"];

/// Get completion items for the given context.
pub fn assemble(context: &LineContext, model: &SemanticModel) -> CompletionResponse {
    let items = match context {
        LineContext::ColumnExpected { table } => complete_columns(table, model),
        LineContext::TableExpected => complete_tables(model),
        LineContext::Default => complete_default(model),
    };

    CompletionResponse {
        items,
        is_incomplete: false,
    }
}

/// Columns of the named table only. Unknown table yields an empty list.
fn complete_columns(table_name: &str, model: &SemanticModel) -> Vec<CompletionItem> {
    let Some(table) = model.find_table(table_name) else {
        return Vec::new();
    };

    table
        .members_of_kind(ColumnKind::Column)
        .filter(|c| !c.hidden)
        .map(column_item)
        .collect()
}

/// All tables in the model, in declaration order.
fn complete_tables(model: &SemanticModel) -> Vec<CompletionItem> {
    model.tables().iter().map(table_item).collect()
}

/// Functions, keywords, tables and measures, concatenated in that fixed
/// order. Tier strings take care of the presentation ranking.
fn complete_default(model: &SemanticModel) -> Vec<CompletionItem> {
    let mut items = Vec::new();

    for func in model.functions() {
        items.push(function_item(func));
    }
    for keyword in KEYWORDS {
        items.push(keyword_item(keyword));
    }
    for table in model.tables() {
        items.push(table_item(table));
    }
    for measure in model.measures().filter(|m| !m.hidden) {
        items.push(measure_item(measure));
    }

    items
}

fn column_item(col: &Column) -> CompletionItem {
    CompletionItem {
        label: col.bracketed_name(),
        detail: member_detail(col),
        documentation: non_empty(&col.description),
        kind: CompletionKind::Field,
        sort_text: TIER_MEMBER.to_string(),
        insert_text: None,
        filter_text: Some(col.name.clone()),
    }
}

fn measure_item(measure: &Column) -> CompletionItem {
    CompletionItem {
        label: measure.bracketed_name(),
        detail: Some(format!("measure of '{}'", measure.table)),
        documentation: non_empty(&measure.description),
        kind: CompletionKind::Variable,
        sort_text: TIER_MEMBER.to_string(),
        insert_text: None,
        filter_text: Some(measure.name.clone()),
    }
}

fn table_item(table: &Table) -> CompletionItem {
    CompletionItem {
        label: table.quoted_name(),
        detail: non_empty(&table.caption).or_else(|| Some("table".to_string())),
        documentation: non_empty(&table.description),
        kind: CompletionKind::Class,
        sort_text: TIER_ENTITY.to_string(),
        insert_text: None,
        filter_text: Some(table.name.clone()),
    }
}

fn function_item(func: &Function) -> CompletionItem {
    let documentation = match (non_empty(&func.syntax), non_empty(&func.description)) {
        (Some(syntax), Some(desc)) => Some(format!("`{}`\n\n{}", syntax, desc)),
        (Some(syntax), None) => Some(format!("`{}`", syntax)),
        (None, desc) => desc,
    };

    CompletionItem {
        label: func.name.clone(),
        detail: non_empty(&func.category).or_else(|| Some("function".to_string())),
        documentation,
        kind: CompletionKind::Function,
        sort_text: TIER_ENTITY.to_string(),
        insert_text: None,
        filter_text: None,
    }
}

fn keyword_item(keyword: &str) -> CompletionItem {
    CompletionItem {
        label: keyword.to_string(),
        detail: None,
        documentation: None,
        kind: CompletionKind::Keyword,
        sort_text: TIER_KEYWORD.to_string(),
        insert_text: None,
        filter_text: None,
    }
}

fn member_detail(col: &Column) -> Option<String> {
    non_empty(&col.data_type).or_else(|| non_empty(&col.caption))
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
