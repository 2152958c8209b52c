//! End-to-end dispatch loop scenarios over in-memory pipes.

use std::io::Cursor;

use serde_json::{json, Value};

use daxls::Dispatcher;

/// Feed newline-delimited requests through the loop and collect the
/// decoded responses.
fn run_requests(requests: &[Value]) -> Vec<Value> {
    let input: String = requests
        .iter()
        .map(|r| format!("{}\n", r))
        .collect();

    let mut output = Vec::new();
    let mut dispatcher = Dispatcher::new();
    dispatcher
        .run(Cursor::new(input), &mut output)
        .expect("dispatch loop failed");

    String::from_utf8(output)
        .expect("non-utf8 output")
        .lines()
        .map(|l| serde_json::from_str(l).expect("non-json response line"))
        .collect()
}

fn sales_model_request() -> Value {
    json!({
        "method": "setModel",
        "params": {
            "tables": [{
                "name": "Sales",
                "caption": "Sales",
                "columns": [
                    {"name": "Amount", "dataType": "Decimal"},
                    {"name": "Date", "dataType": "DateTime"}
                ]
            }],
            "measures": [
                {"table": "Sales", "name": "Total Sales", "dataType": "Decimal"}
            ],
            "functions": [{
                "name": "SUM",
                "description": "Adds all the numbers in a column",
                "syntax": "SUM(<column>)",
                "parameters": ["column"],
                "category": "AGGREGATION"
            }],
            "dmvHandle": null
        }
    })
}

#[test]
fn test_column_completion_for_sales_table() {
    let line = "EVALUATE Sales[";
    let responses = run_requests(&[
        sales_model_request(),
        json!({
            "method": "completion",
            "params": {"line": line, "column": line.len(), "lineOffset": 0, "fullText": line}
        }),
    ]);

    assert_eq!(responses[0]["success"], true);

    let items = responses[1]["items"].as_array().unwrap();
    let labels: Vec<_> = items.iter().map(|i| i["label"].as_str().unwrap()).collect();
    assert_eq!(labels, vec!["[Amount]", "[Date]"]);
    assert!(items.iter().all(|i| i["sortText"] == "050"));
    assert_eq!(responses[1]["isIncomplete"], false);
}

#[test]
fn test_empty_model_default_completion_is_keywords_only() {
    let responses = run_requests(&[json!({
        "method": "completion",
        "params": {"line": "", "column": 0}
    })]);

    let items = responses[0]["items"].as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert!(items.iter().all(|i| i["kind"] == 14));
}

#[test]
fn test_signature_help_after_open_paren() {
    let responses = run_requests(&[
        sales_model_request(),
        json!({
            "method": "signatureHelp",
            "params": {"line": "SUM(", "column": 4, "fullText": "SUM("}
        }),
    ]);

    let help = &responses[1];
    assert_eq!(help["signatures"].as_array().unwrap().len(), 1);
    assert_eq!(help["signatures"][0]["label"], "SUM(<column>)");
    assert_eq!(help["activeSignature"], 0);
    assert_eq!(help["activeParameter"], 0);
}

#[test]
fn test_hover_miss_is_absent_not_error() {
    let responses = run_requests(&[
        sales_model_request(),
        json!({
            "method": "hover",
            "params": {"line": "Bogus", "column": 2, "lineOffset": 0, "fullText": "Bogus"}
        }),
    ]);

    let hover = &responses[1];
    assert!(hover.get("error").is_none());
    assert!(hover.get("contents").is_none());
}

#[test]
fn test_hover_range_uses_document_line() {
    let full_text = "DEFINE\nEVALUATE Sales";
    let responses = run_requests(&[
        sales_model_request(),
        json!({
            "method": "hover",
            "params": {
                "line": "EVALUATE Sales",
                "column": 10,
                // Character offset of the second line's start.
                "lineOffset": 7,
                "fullText": full_text
            }
        }),
    ]);

    let hover = &responses[1];
    assert!(hover["contents"].as_str().unwrap().contains("'Sales'"));
    assert_eq!(hover["range"]["start"]["line"], 1);
    assert_eq!(hover["range"]["start"]["character"], 9);
    assert_eq!(hover["range"]["end"]["character"], 14);
}

#[test]
fn test_diagnostics_always_empty() {
    let responses = run_requests(&[json!({
        "method": "diagnostics",
        "params": {"fullText": "EVALUATE ][ nonsense", "uri": "file:///q.dax"}
    })]);

    assert_eq!(responses[0]["diagnostics"], json!([]));
}

#[test]
fn test_empty_line_terminates_without_response() {
    let input = format!("{}\n\n{}\n", sales_model_request(), sales_model_request());
    let mut output = Vec::new();
    let mut dispatcher = Dispatcher::new();
    dispatcher.run(Cursor::new(input), &mut output).unwrap();

    // Only the request before the blank line is answered.
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_eof_terminates_cleanly() {
    let mut output = Vec::new();
    let mut dispatcher = Dispatcher::new();
    dispatcher.run(Cursor::new(String::new()), &mut output).unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_loop_survives_bad_requests() {
    let responses = run_requests(&[
        json!({"method": "frobnicate", "params": {}}),
        json!({"method": "completion", "params": {"line": "", "column": 0}}),
    ]);

    assert!(responses[0]["error"].as_str().unwrap().contains("unknown method"));
    assert_eq!(responses[1]["items"].as_array().unwrap().len(), 6);
}

#[test]
fn test_set_model_swap_is_wholesale() {
    let table_completion = json!({
        "method": "completion",
        "params": {"line": "'", "column": 1}
    });

    let replacement = json!({
        "method": "setModel",
        "params": {
            "tables": [{"name": "Customers", "columns": [{"name": "Name"}]}],
            "measures": [],
            "functions": []
        }
    });

    let responses = run_requests(&[
        sales_model_request(),
        table_completion.clone(),
        replacement,
        table_completion,
    ]);

    let before: Vec<_> = responses[1]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["label"].as_str().unwrap().to_string())
        .collect();
    let after: Vec<_> = responses[3]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["label"].as_str().unwrap().to_string())
        .collect();

    // The old model never leaks entities into requests after the swap,
    // and vice versa.
    assert_eq!(before, vec!["'Sales'"]);
    assert_eq!(after, vec!["'Customers'"]);
}
