//! Synchronous request dispatch loop.
//!
//! One request is fully decoded, resolved and encoded before the next is
//! read, so the model store needs no locking: a `setModel` is visible to
//! every request issued after it and to none issued before. The loop never
//! dies on a bad request; it answers `{"error": ...}` and keeps reading.
//! An empty input line (or EOF) is the graceful shutdown signal.

use std::io::{BufRead, Write};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::{ServiceError, ServiceResult};
use super::{
    methods, DiagnosticsParams, ErrorResponse, PositionParams, RequestEnvelope, SetModelParams,
    SetModelResponse, SignatureHelpParams,
};
use crate::analysis::parse_line;
use crate::capabilities::{completions, diagnostics, hover, signature};
use crate::model::ModelStore;

/// Routes requests and owns the current model.
#[derive(Debug, Default)]
pub struct Dispatcher {
    store: ModelStore,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the dispatch loop until EOF or an empty input line.
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, writer: &mut W) -> ServiceResult<()> {
        let mut line = String::new();

        loop {
            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    // A dead input stream is a shutdown, not a failure.
                    warn!(error = %e, "input stream closed");
                    break;
                }
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                break;
            }

            let response = self.handle_line(trimmed);
            writeln!(writer, "{}", response).map_err(ServiceError::WriteFailed)?;
            writer.flush().map_err(ServiceError::WriteFailed)?;
        }

        Ok(())
    }

    /// Decode, route and execute one request. Every failure collapses to
    /// the degenerate `{"error": ...}` envelope.
    pub fn handle_line(&mut self, line: &str) -> Value {
        match self.dispatch(line) {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "request failed");
                encode(&ErrorResponse {
                    error: e.to_string(),
                })
                .unwrap_or_else(|_| serde_json::json!({ "error": "response encoding failed" }))
            }
        }
    }

    fn dispatch(&mut self, line: &str) -> ServiceResult<Value> {
        let request: RequestEnvelope =
            serde_json::from_str(line).map_err(ServiceError::MalformedRequest)?;
        debug!(method = %request.method, "dispatching");

        match request.method.as_str() {
            methods::COMPLETION => {
                let p: PositionParams = decode_params(&request)?;
                let model = self.store.current();
                let parsed = parse_line(&p.line, clamp(p.column), clamp(p.line_offset));
                encode(&completions::assemble(&parsed.context, &model))
            }
            methods::SIGNATURE_HELP => {
                let p: SignatureHelpParams = decode_params(&request)?;
                let model = self.store.current();
                encode(&signature::resolve_signature(&p.line, clamp(p.column), &model))
            }
            methods::HOVER => {
                let p: PositionParams = decode_params(&request)?;
                let model = self.store.current();
                let line_offset = clamp(p.line_offset);
                let line_index = line_index_for_offset(&p.full_text, line_offset);
                encode(&hover::resolve_hover(
                    &p.line,
                    clamp(p.column),
                    line_offset,
                    line_index,
                    &model,
                ))
            }
            methods::DIAGNOSTICS => {
                let p: DiagnosticsParams = decode_params(&request)?;
                encode(&diagnostics::collect(&p.full_text, &p.uri))
            }
            methods::SET_MODEL => {
                let p: SetModelParams = decode_params(&request)?;
                self.store.set(p.into_model());
                encode(&SetModelResponse { success: true })
            }
            other => Err(ServiceError::UnknownMethod(other.to_string())),
        }
    }
}

fn decode_params<T: DeserializeOwned>(request: &RequestEnvelope) -> ServiceResult<T> {
    serde_json::from_value(request.params.clone()).map_err(|e| ServiceError::InvalidParams {
        method: request.method.clone(),
        source: e,
    })
}

fn encode<T: serde::Serialize>(response: &T) -> ServiceResult<Value> {
    serde_json::to_value(response).map_err(ServiceError::EncodeFailed)
}

fn clamp(value: i64) -> usize {
    value.max(0) as usize
}

/// Recover the document line index from the character offset of the line
/// start. Inconsistent offsets fall back to line 0.
fn line_index_for_offset(full_text: &str, offset: usize) -> u32 {
    if offset == 0 || offset > full_text.chars().count() {
        return 0;
    }
    full_text
        .chars()
        .take(offset)
        .filter(|&c| c == '\n')
        .count() as u32
}
