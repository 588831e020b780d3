//! Coordinate translation
//!
//! The locator works in schema-relative line/column coordinates. Reports go
//! to the host in carrier-relative coordinates, and rename suggestions need
//! absolute byte ranges in a text buffer. The functions here compose those
//! translations.

use std::sync::LazyLock;

use regex::Regex;

use crate::locator::SourcePosition;

/// Line/column span for a host report; end is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

/// Shift a schema-relative position into carrier coordinates.
///
/// Only the line moves; columns are unaffected by carrier wrapping.
pub fn apply_line_offset(position: SourcePosition, offset: usize) -> SourcePosition {
    SourcePosition {
        line: position.line + offset,
        column: position.column,
    }
}

impl ReportSpan {
    /// Single-character span at `position`, used for whole-statement reports
    /// where no token length is known.
    pub fn single(position: SourcePosition) -> Self {
        Self {
            start: position,
            end: SourcePosition {
                line: position.line,
                column: position.column + 1,
            },
        }
    }

    /// Span covering `length` columns starting at `position`.
    pub fn with_length(position: SourcePosition, length: usize) -> Self {
        Self {
            start: position,
            end: SourcePosition {
                line: position.line,
                column: position.column + length,
            },
        }
    }
}

/// Byte offsets of each line start in a text buffer.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// Index `text` once; line starts are the byte after every newline.
    pub fn new(text: &str) -> Self {
        let mut starts = vec![0];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(offset + 1);
            }
        }
        Self {
            starts,
            len: text.len(),
        }
    }

    /// Byte offset of the start of a 1-based line; end of buffer when the
    /// line is out of range.
    pub fn line_start(&self, line: usize) -> usize {
        self.starts.get(line - 1).copied().unwrap_or(self.len)
    }

    /// Text of a 1-based line, without its terminating newline.
    pub fn line_text<'a>(&self, text: &'a str, line: usize) -> &'a str {
        let start = self.line_start(line);
        let end = match self.starts.get(line) {
            Some(next_start) => next_start - 1,
            None => self.len,
        };
        &text[start..end.max(start)]
    }
}

/// Resolve a position plus a known token length into absolute byte offsets
/// within `text`: start inclusive, end exclusive.
pub fn source_range(text: &str, position: SourcePosition, length: usize) -> (usize, usize) {
    let index = LineIndex::new(text);
    let start = index.line_start(position.line) + position.column;
    (start, start + length)
}

static MAP_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@{1,2}map\("([^"]*)"\)"#).expect("valid pattern"));

/// Byte range of exactly the quoted value of a `@map`/`@@map` attribute on
/// the given 1-based line, excluding the quotes.
///
/// Returns `None` when the attribute pattern is not found on that line,
/// which guards against a caller passing a stale line number; the caller
/// then omits the suggestion but still reports the diagnostic.
pub fn map_value_range(text: &str, line: usize) -> Option<(usize, usize)> {
    let index = LineIndex::new(text);
    let line_text = index.line_text(text, line);
    let value = MAP_VALUE.captures(line_text)?.get(1)?;
    let start = index.line_start(line) + value.start();
    Some((start, start + value.len()))
}
