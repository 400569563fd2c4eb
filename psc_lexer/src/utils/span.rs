//! Source location tracking for the PSC lexer
//!
//! Positions count code points, not bytes, for the column field: the
//! presentation layer maps (line, column) straight onto text-widget
//! coordinates, so every non-newline character is exactly one column.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line, column, and byte offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Byte offset from start of input (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number in code points (1-based)
    pub column: u32,
}

impl Position {
    /// Create a new position
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Create the starting position (offset 0, line 1, column 1)
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Advance position by one character.
    ///
    /// `\n` and `\r` are both newline events; `\r\n` pairs must go
    /// through [`Position::advance_str`] so the pair counts once.
    pub fn advance(self, ch: char) -> Self {
        match ch {
            '\n' | '\r' => Self {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 1,
            },
            _ => Self {
                offset: self.offset + ch.len_utf8(),
                line: self.line,
                column: self.column + 1,
            },
        }
    }

    /// Advance position over a consumed slice of source text.
    ///
    /// This is the single advance operation the tokenizer calls after
    /// every successful match; matchers never touch position state
    /// directly. A `\r\n` pair consumed as a unit is one newline event.
    pub fn advance_str(self, s: &str) -> Self {
        let mut pos = self;
        let mut chars = s.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
                pos = Self {
                    offset: pos.offset + 2,
                    line: pos.line + 1,
                    column: 1,
                };
            } else {
                pos = pos.advance(ch);
            }
        }
        pos
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from start to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    /// Create a new span
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "Span start must not be after end"
        );
        Self { start, end }
    }

    /// Create a single-character span
    pub fn single(pos: Position) -> Self {
        let end = Position {
            offset: pos.offset + 1,
            line: pos.line,
            column: pos.column + 1,
        };
        Self { start: pos, end }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Merge two spans into one covering both
    pub fn merge(self, other: Self) -> Self {
        let start = if self.start.offset < other.start.offset {
            self.start
        } else {
            other.start
        };
        let end = if self.end.offset > other.end.offset {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// Get the byte length of this span
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Get the source text for this span from the input
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start.offset..self.end.offset]
    }

    /// Create an unknown/dummy span (useful for synthetic tokens)
    pub fn dummy() -> Self {
        Self {
            start: Position::start(),
            end: Position::start(),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A source map that tracks line starts for efficient line lookup
#[derive(Debug, Clone)]
pub struct SourceMap {
    /// The original source text
    pub source: String,
    /// Byte offsets of line starts
    line_starts: Vec<usize>,
}

impl SourceMap {
    /// Create a new source map from source text
    pub fn new(source: String) -> Self {
        let mut line_starts = vec![0];
        let mut chars = source.char_indices().peekable();
        while let Some((offset, ch)) = chars.next() {
            match ch {
                '\n' => line_starts.push(offset + 1),
                '\r' => {
                    if chars.peek().map(|&(_, c)| c) == Some('\n') {
                        chars.next();
                        line_starts.push(offset + 2);
                    } else {
                        line_starts.push(offset + 1);
                    }
                }
                _ => {}
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// Get a line of text by line number (1-based), without its
    /// trailing newline.
    pub fn get_line(&self, line_num: u32) -> Option<&str> {
        if line_num == 0 {
            return None;
        }

        let line_idx = (line_num - 1) as usize;
        if line_idx >= self.line_starts.len() {
            return None;
        }

        let start = self.line_starts[line_idx];
        let end = if line_idx + 1 < self.line_starts.len() {
            self.line_starts[line_idx + 1]
        } else {
            self.source.len()
        };

        Some(self.source[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the text covered by a span
    pub fn span_text(&self, span: &Span) -> &str {
        span.slice(&self.source)
    }

    /// Build the two-line caret diagram for an error position: the raw
    /// text of the failing line, then `column - 1` spaces and a caret.
    ///
    /// The report writer copies this verbatim, so the format is fixed.
    pub fn caret_diagram(&self, line: u32, column: u32) -> Option<String> {
        let text = self.get_line(line)?;
        let padding = " ".repeat(column.saturating_sub(1) as usize);
        Some(format!("{}\n{}^", text, padding))
    }

    /// Format an error message with source context
    pub fn format_error(&self, span: &Span, message: &str) -> String {
        let mut result = String::new();
        result.push_str(&format!("Error: {}\n", message));
        result.push_str(&format!(
            "  --> {}:{}\n",
            span.start.line, span.start.column
        ));

        if let Some(diagram) = self.caret_diagram(span.start.line, span.start.column) {
            result.push_str(&diagram);
            result.push('\n');
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_str_counts_lines_and_columns() {
        let pos = Position::start().advance_str("ab\ncd");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 3);
        assert_eq!(pos.offset, 5);
    }

    #[test]
    fn test_crlf_is_one_newline_event() {
        let pos = Position::start().advance_str("a\r\nb");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 2);
        assert_eq!(pos.offset, 4);
    }

    #[test]
    fn test_lone_cr_is_a_newline_event() {
        let pos = Position::start().advance_str("a\rb");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 2);
    }

    #[test]
    fn test_multibyte_chars_are_one_column() {
        let pos = Position::start().advance_str("ñÑá");
        assert_eq!(pos.column, 4);
        assert_eq!(pos.offset, 6);
    }

    #[test]
    fn test_source_map_lines() {
        let map = SourceMap::new("uno\ndos\r\ntres".to_string());
        assert_eq!(map.get_line(1), Some("uno"));
        assert_eq!(map.get_line(2), Some("dos"));
        assert_eq!(map.get_line(3), Some("tres"));
        assert_eq!(map.get_line(4), None);
        assert_eq!(map.line_count(), 3);
    }

    #[test]
    fn test_caret_diagram_alignment() {
        let map = SourceMap::new("Leer x # y\n".to_string());
        let diagram = map.caret_diagram(1, 8).unwrap();
        assert_eq!(diagram, "Leer x # y\n       ^");
    }

    #[test]
    fn test_caret_diagram_column_one() {
        let map = SourceMap::new("#".to_string());
        assert_eq!(map.caret_diagram(1, 1).unwrap(), "#\n^");
    }
}
