//! Service error types.

use thiserror::Error;

/// Result type for dispatch operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors reported inline as `{"error": ...}` responses.
///
/// None of these are fatal: the dispatch loop answers the failing request
/// and keeps reading. Missing tables, columns and functions are not errors
/// at all; they produce empty results.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Request line is not a valid envelope.
    #[error("malformed request: {0}")]
    MalformedRequest(#[source] serde_json::Error),

    /// Envelope decoded but the method is not routed.
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// Parameters do not match the method's expected shape.
    #[error("invalid params for {method}: {source}")]
    InvalidParams {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    /// A response could not be encoded.
    #[error("failed to encode response: {0}")]
    EncodeFailed(#[source] serde_json::Error),

    /// Writing a response to the output stream failed. This one does end
    /// the loop: there is nobody left to answer.
    #[error("failed to write response: {0}")]
    WriteFailed(#[source] std::io::Error),
}
