//! Line-context detection.
//!
//! Classifies the syntactic slot at the cursor so the completion assembler
//! knows what kind of identifier is expected. Works on the single line of
//! text around the cursor with lightweight scanning; anything it cannot
//! classify degrades to [`LineContext::Default`] rather than failing.

/// What kind of identifier is expected at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineContext {
    /// Functions, keywords, tables and measures are all valid.
    Default,

    /// A table reference is expected (inside `'...` or after `EVALUATE`).
    TableExpected,

    /// A column of the named table is expected (inside `Table[` / `'Table'[`).
    ColumnExpected { table: String },
}

impl Default for LineContext {
    fn default() -> Self {
        Self::Default
    }
}

/// The resolved context plus the partial identifier already typed at the
/// cursor. Recomputed per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub context: LineContext,
    /// Case-preserved fragment, usable as a filter prefix by the editor.
    pub fragment: String,
}

/// Classify the cursor position on `line`.
///
/// `column` is a zero-based character offset; out-of-range values clamp to
/// the nearest valid offset. `line_offset` locates the line inside a larger
/// document and is unused by the line-local heuristics here.
pub fn parse_line(line: &str, column: usize, _line_offset: usize) -> ParsedLine {
    let chars: Vec<char> = line.chars().collect();
    let col = column.min(chars.len());
    let before = &chars[..col];

    // Open bracket: `Sales[Am` or `'Net Sales'[Am`.
    if let Some(open) = last_unclosed(before, '[', ']') {
        let fragment: String = before[open + 1..].iter().collect();
        if let Some(table) = table_reference_ending_at(before, open) {
            return ParsedLine {
                context: LineContext::ColumnExpected { table },
                fragment,
            };
        }
        // Bare `[...` with no qualifying table: measure reference territory.
        return ParsedLine {
            context: LineContext::Default,
            fragment,
        };
    }

    // Open single quote: a table name is being typed (`'Net Sa`).
    if let Some(open) = unclosed_quote(before) {
        return ParsedLine {
            context: LineContext::TableExpected,
            fragment: before[open + 1..].iter().collect(),
        };
    }

    let fragment_start = identifier_run_start(before, col);
    let fragment: String = before[fragment_start..].iter().collect();

    // Identifier slot right after a table-position keyword.
    if preceding_word(before, fragment_start)
        .map(|w| w.eq_ignore_ascii_case("EVALUATE"))
        .unwrap_or(false)
    {
        return ParsedLine {
            context: LineContext::TableExpected,
            fragment,
        };
    }

    ParsedLine {
        context: LineContext::Default,
        fragment,
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Index of the last `open` in `chars` with no matching `close` after it.
fn last_unclosed(chars: &[char], open: char, close: char) -> Option<usize> {
    let open_at = chars.iter().rposition(|&c| c == open)?;
    if chars[open_at + 1..].contains(&close) {
        None
    } else {
        Some(open_at)
    }
}

/// Index of the opening quote when the cursor sits inside an odd-quoted run.
fn unclosed_quote(chars: &[char]) -> Option<usize> {
    let count = chars.iter().filter(|&&c| c == '\'').count();
    if count % 2 == 1 {
        chars.iter().rposition(|&c| c == '\'')
    } else {
        None
    }
}

/// The table reference (bare identifier or `'quoted name'`) whose last
/// character sits at `end - 1`.
fn table_reference_ending_at(chars: &[char], end: usize) -> Option<String> {
    if end == 0 {
        return None;
    }

    if chars[end - 1] == '\'' {
        let open = chars[..end - 1].iter().rposition(|&c| c == '\'')?;
        let name: String = chars[open + 1..end - 1].iter().collect();
        return if name.is_empty() { None } else { Some(name) };
    }

    let start = identifier_run_start(chars, end);
    if start == end {
        return None;
    }
    Some(chars[start..end].iter().collect())
}

/// Start of the identifier-class run ending at `end`.
fn identifier_run_start(chars: &[char], end: usize) -> usize {
    let mut start = end;
    while start > 0 && is_identifier_char(chars[start - 1]) {
        start -= 1;
    }
    start
}

/// The whitespace-separated word that precedes position `end`, if any.
fn preceding_word(chars: &[char], end: usize) -> Option<String> {
    let mut i = end;
    while i > 0 && chars[i - 1].is_whitespace() {
        i -= 1;
    }
    let word_end = i;
    while i > 0 && is_identifier_char(chars[i - 1]) {
        i -= 1;
    }
    if i == word_end {
        None
    } else {
        Some(chars[i..word_end].iter().collect())
    }
}
