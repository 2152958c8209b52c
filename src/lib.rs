//! # daxls
//!
//! DAX language intelligence over a line-oriented JSON protocol.
//!
//! The service reads one request per line on stdin and answers one
//! response per line on stdout; an editor-side bridge translates these
//! into LSP traffic. All intelligence is metadata-driven: an editor pushes
//! the semantic model (tables, columns, measures, functions) via
//! `setModel`, and subsequent requests read that snapshot.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          Dispatcher (one request per line)               │
//! │   completion · signatureHelp · hover · diagnostics       │
//! │                    · setModel                            │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [analysis]
//! ┌─────────────────────────────────────────────────────────┐
//! │    LineContext (Default / TableExpected / ColumnExpected)│
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [capabilities]
//! ┌─────────────────────────────────────────────────────────┐
//! │     Candidate assembly against the model snapshot        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [model]
//! ┌─────────────────────────────────────────────────────────┐
//! │   SemanticModel (immutable, swapped wholesale on update) │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod analysis;
pub mod capabilities;
pub mod model;
pub mod protocol;

pub use model::{ModelStore, SemanticModel};
pub use protocol::dispatch::Dispatcher;
