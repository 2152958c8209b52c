//! Word extraction at a cursor position.

/// The maximal identifier-class run containing the cursor, with its
/// zero-based character bounds on the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Extract the word at `column` on `line`.
///
/// The cursor counts as inside a word when an identifier character sits at
/// or immediately before it, so hovering at the end of a word still
/// resolves. Out-of-range columns clamp; no word yields `None`.
pub fn word_at(line: &str, column: usize) -> Option<WordSpan> {
    let chars: Vec<char> = line.chars().collect();
    let col = column.min(chars.len());

    let anchor = if col < chars.len() && is_identifier_char(chars[col]) {
        col
    } else if col > 0 && is_identifier_char(chars[col - 1]) {
        col - 1
    } else {
        return None;
    };

    let mut start = anchor;
    while start > 0 && is_identifier_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = anchor + 1;
    while end < chars.len() && is_identifier_char(chars[end]) {
        end += 1;
    }

    Some(WordSpan {
        text: chars[start..end].iter().collect(),
        start,
        end,
    })
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
