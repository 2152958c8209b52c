//! Signature help.
//!
//! Finds the function call enclosing the cursor by scanning back to the
//! nearest unmatched open parenthesis, then counts argument separators to
//! pick the active parameter. One signature per function; there is no
//! overloading.

use crate::model::SemanticModel;
use crate::protocol::{ParameterInformation, SignatureHelpResponse, SignatureInformation};

/// Resolve signature help at the cursor. Unknown or absent function names
/// yield an empty signature list, not an error.
pub fn resolve_signature(line: &str, column: usize, model: &SemanticModel) -> SignatureHelpResponse {
    let Some(call) = enclosing_call(line, column) else {
        return SignatureHelpResponse::empty();
    };

    let Some(func) = model.find_function(&call.name) else {
        return SignatureHelpResponse::empty();
    };

    let active_parameter = if func.parameters.is_empty() {
        0
    } else {
        call.separators.min(func.parameters.len() - 1) as u32
    };

    let parameters = func
        .parameters
        .iter()
        .map(|name| ParameterInformation {
            label: name.clone(),
            documentation: None,
        })
        .collect();

    SignatureHelpResponse {
        signatures: vec![SignatureInformation {
            label: func.signature_label(),
            documentation: if func.description.is_empty() {
                None
            } else {
                Some(func.description.clone())
            },
            parameters,
        }],
        active_signature: 0,
        active_parameter,
    }
}

struct CallSite {
    name: String,
    /// Top-level comma count between the open parenthesis and the cursor.
    separators: usize,
}

/// The innermost unmatched `(` before the cursor and the identifier that
/// precedes it.
fn enclosing_call(line: &str, column: usize) -> Option<CallSite> {
    let chars: Vec<char> = line.chars().collect();
    let col = column.min(chars.len());

    let mut depth = 0usize;
    let mut open = None;
    for i in (0..col).rev() {
        match chars[i] {
            ')' => depth += 1,
            '(' => {
                if depth == 0 {
                    open = Some(i);
                    break;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    let open = open?;

    let mut start = open;
    while start > 0 && (chars[start - 1].is_alphanumeric() || chars[start - 1] == '_') {
        start -= 1;
    }
    if start == open {
        return None;
    }

    let mut nested = 0usize;
    let mut separators = 0usize;
    for &c in &chars[open + 1..col] {
        match c {
            '(' => nested += 1,
            ')' => nested = nested.saturating_sub(1),
            ',' if nested == 0 => separators += 1,
            _ => {}
        }
    }

    Some(CallSite {
        name: chars[start..open].iter().collect(),
        separators,
    })
}
