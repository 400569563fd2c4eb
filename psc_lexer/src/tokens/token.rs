//! Lexeme-preserving tokens
//!
//! Tokens keep the exact matched substring: the presentation layer
//! paints `(line, column)..(line, column + lexeme chars)` spans, so
//! the lexeme must bound the source span byte-for-byte.
use crate::utils::{Position, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token categories produced by the tokenizer.
///
/// `Newline` and `Eof` are internal stream markers excluded from
/// user-facing counts; `Error` is never produced by the tokenizer,
/// it exists as a styling key for the single offending character
/// when tokenization fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Reserved word of the active dialect
    Keyword,
    /// Integer or decimal literal, optional exponent
    Number,
    /// Boolean literal (Verdadero/Falso, any casing)
    Boolean,
    /// Grouping symbol: ( ) [ ] { }
    Group,
    /// Operator or punctuation, including the word operators
    Op,
    /// Quoted string literal, quotes included in the lexeme
    String,
    /// User-defined identifier
    Ident,
    /// Line or block comment, markers included in the lexeme
    Comment,
    /// Internal line-boundary marker
    Newline,
    /// Internal end-of-stream sentinel
    Eof,
    /// Synthetic styling key for the character a lexical error points at
    Error,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "KEYWORD",
            Self::Number => "NUMBER",
            Self::Boolean => "BOOLEAN",
            Self::Group => "GROUP",
            Self::Op => "OP",
            Self::String => "STRING",
            Self::Ident => "IDENT",
            Self::Comment => "COMMENT",
            Self::Newline => "NL",
            Self::Eof => "EOF",
            Self::Error => "ERROR",
        }
    }

    /// Internal stream markers are not significant: they are excluded
    /// from user-facing token counts and from highlighting.
    pub fn is_significant(self) -> bool {
        !matches!(self, Self::Newline | Self::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable positioned token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token category
    pub kind: TokenKind,
    /// Exact substring matched from the source
    pub lexeme: String,
    /// Position of the first character of the match
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Line the match starts on (1-based)
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Column of the first character of the match (1-based, code points)
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Source span covered by this token
    pub fn span(&self) -> Span {
        let end = self.position.advance_str(&self.lexeme);
        Span::new(self.position, end)
    }

    /// Lexeme length in code points, for display-coordinate mapping
    pub fn width(&self) -> usize {
        self.lexeme.chars().count()
    }

    pub fn is_significant(&self) -> bool {
        self.kind.is_significant()
    }

    pub fn is_keyword(&self) -> bool {
        self.kind == TokenKind::Keyword
    }

    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) at {}", self.kind, self.lexeme, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_bounds_lexeme() {
        let token = Token::new(TokenKind::Keyword, "Si", Position::new(4, 1, 5));
        let span = token.span();
        assert_eq!(span.start.column, 5);
        assert_eq!(span.end.column, 7);
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn test_width_counts_code_points() {
        let token = Token::new(TokenKind::Ident, "año", Position::start());
        assert_eq!(token.width(), 3);
        assert_eq!(token.lexeme.len(), 4);
    }

    #[test]
    fn test_significance() {
        assert!(TokenKind::Comment.is_significant());
        assert!(TokenKind::Error.is_significant());
        assert!(!TokenKind::Newline.is_significant());
        assert!(!TokenKind::Eof.is_significant());
    }
}
