//! Completion assembler properties over a richer fixture model.

use daxls::analysis::LineContext;
use daxls::capabilities::completions::{assemble, KEYWORDS};
use daxls::model::{Column, ColumnKind, Function, SemanticModel, Table};

fn column(name: &str, table: &str, kind: ColumnKind) -> Column {
    Column {
        name: name.to_string(),
        caption: String::new(),
        description: String::new(),
        data_type: "Decimal".to_string(),
        hidden: false,
        table: table.to_string(),
        kind,
    }
}

fn function(name: &str, parameters: &[&str]) -> Function {
    Function {
        name: name.to_string(),
        description: String::new(),
        syntax: String::new(),
        parameters: parameters.iter().map(|p| p.to_string()).collect(),
        category: String::new(),
    }
}

fn fixture_model() -> SemanticModel {
    SemanticModel::new(
        vec![
            Table {
                name: "Sales".to_string(),
                caption: String::new(),
                description: String::new(),
                columns: vec![
                    column("Amount", "Sales", ColumnKind::Column),
                    column("Date", "Sales", ColumnKind::Column),
                    column("Total Sales", "Sales", ColumnKind::Measure),
                    column("Sales YTD", "Sales", ColumnKind::Measure),
                ],
            },
            Table {
                name: "Customers".to_string(),
                caption: String::new(),
                description: String::new(),
                columns: vec![
                    column("Name", "Customers", ColumnKind::Column),
                    column("Customer Count", "Customers", ColumnKind::Measure),
                ],
            },
            Table {
                name: "Calendar".to_string(),
                caption: String::new(),
                description: String::new(),
                columns: vec![column("Year", "Calendar", ColumnKind::Column)],
            },
        ],
        vec![
            function("SUM", &["column"]),
            function("COUNTROWS", &["table"]),
            function("DIVIDE", &["numerator", "denominator", "alternateResult"]),
        ],
    )
}

#[test]
fn test_column_context_returns_exactly_that_tables_columns() {
    let model = fixture_model();

    for (table, expected) in [
        ("Sales", vec!["[Amount]", "[Date]"]),
        ("Customers", vec!["[Name]"]),
        ("Calendar", vec!["[Year]"]),
    ] {
        let resp = assemble(
            &LineContext::ColumnExpected {
                table: table.to_string(),
            },
            &model,
        );
        let labels: Vec<_> = resp.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, expected, "columns of {}", table);
    }
}

#[test]
fn test_table_context_is_one_item_per_table_in_model_order() {
    let model = fixture_model();
    let resp = assemble(&LineContext::TableExpected, &model);

    assert_eq!(resp.items.len(), model.tables().len());
    let labels: Vec<_> = resp.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["'Sales'", "'Customers'", "'Calendar'"]);
}

#[test]
fn test_default_count_formula() {
    let model = fixture_model();
    let resp = assemble(&LineContext::Default, &model);

    let functions = model.functions().len();
    let tables = model.tables().len();
    let measures = model.measures().count();
    assert_eq!(
        resp.items.len(),
        functions + KEYWORDS.len() + tables + measures
    );
}

#[test]
fn test_keyword_count_is_independent_of_model() {
    let empty = assemble(&LineContext::Default, &SemanticModel::empty());
    let full = assemble(&LineContext::Default, &fixture_model());

    let keywords = |items: &[daxls::protocol::CompletionItem]| {
        items.iter().filter(|i| i.sort_text == "200").count()
    };
    assert_eq!(keywords(&empty.items), 6);
    assert_eq!(keywords(&full.items), 6);
}

#[test]
fn test_no_prefix_filtering_is_applied() {
    // The typed fragment never narrows the list; filtering belongs to the
    // editor, against filterText.
    let model = fixture_model();
    let all = assemble(&LineContext::TableExpected, &model);

    assert!(all
        .items
        .iter()
        .any(|i| i.filter_text.as_deref() == Some("Customers")));
    assert_eq!(all.items.len(), 3);
}

#[test]
fn test_idempotent_byte_identical_output() {
    let model = fixture_model();
    for ctx in [
        LineContext::Default,
        LineContext::TableExpected,
        LineContext::ColumnExpected {
            table: "Sales".to_string(),
        },
    ] {
        let a = serde_json::to_vec(&assemble(&ctx, &model)).unwrap();
        let b = serde_json::to_vec(&assemble(&ctx, &model)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_never_incomplete() {
    let model = fixture_model();
    assert!(!assemble(&LineContext::Default, &model).is_incomplete);
    assert!(!assemble(&LineContext::TableExpected, &model).is_incomplete);
    assert!(
        !assemble(
            &LineContext::ColumnExpected {
                table: "Nope".to_string()
            },
            &model
        )
        .is_incomplete
    );
}
