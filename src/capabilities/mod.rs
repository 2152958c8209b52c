//! Capability handlers: pure functions from (context, model) to payloads.

pub mod completions;
pub mod diagnostics;
pub mod hover;
pub mod signature;
