//! Cursor analysis: context classification and word extraction.

pub mod context;
pub mod word;

pub use context::{parse_line, LineContext, ParsedLine};
pub use word::{word_at, WordSpan};
