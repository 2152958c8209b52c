//! Diagnostics.
//!
//! Reserved extension point: the method is routed and answered so editor
//! clients can keep a single code path, but no validation rules are
//! implemented and the list is always empty.

use crate::protocol::DiagnosticsResponse;

pub fn collect(_full_text: &str, _uri: &str) -> DiagnosticsResponse {
    DiagnosticsResponse {
        diagnostics: Vec::new(),
    }
}
