//! Span-accurate token stream management
//!
//! Maintains the full token vector (newline markers included) next to
//! precomputed indices of significant tokens, so the renderer can walk
//! everything while user-facing counts skip the internal markers.
use crate::tokens::token::{Token, TokenKind};
use crate::utils::SourceMap;

/// An ordered, positioned token sequence with significant-token
/// filtering and optional source context.
#[derive(Debug, Clone)]
pub struct TokenStream {
    /// All tokens in document order, internal markers included
    all_tokens: Vec<Token>,
    /// Indices into all_tokens for significant tokens
    significant_indices: Vec<usize>,
    /// Source map for error formatting and caret diagrams
    source_map: Option<SourceMap>,
}

impl TokenStream {
    /// Create a new token stream with automatic filtering
    pub fn new(tokens: Vec<Token>) -> Self {
        let significant_indices = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_significant())
            .map(|(i, _)| i)
            .collect();
        Self {
            all_tokens: tokens,
            significant_indices,
            source_map: None,
        }
    }

    /// Create stream with source map for enhanced error reporting
    pub fn with_source_map(tokens: Vec<Token>, source_map: SourceMap) -> Self {
        let mut stream = Self::new(tokens);
        stream.source_map = Some(source_map);
        stream
    }

    /// All tokens, internal markers included
    pub fn all_tokens(&self) -> &[Token] {
        &self.all_tokens
    }

    /// Iterate over significant tokens only
    pub fn iter_significant(&self) -> impl Iterator<Item = &Token> {
        self.significant_indices
            .iter()
            .map(|&i| &self.all_tokens[i])
    }

    /// Number of significant tokens (the "Tokens procesados" count)
    pub fn len(&self) -> usize {
        self.significant_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.significant_indices.is_empty()
    }

    /// Count significant tokens of a given kind
    pub fn count_kind(&self, kind: TokenKind) -> usize {
        self.iter_significant().filter(|t| t.kind == kind).count()
    }

    pub fn has_eof(&self) -> bool {
        matches!(
            self.all_tokens.last(),
            Some(token) if token.kind == TokenKind::Eof
        )
    }

    pub fn source_map(&self) -> Option<&SourceMap> {
        self.source_map.as_ref()
    }

    /// Get line content for error context
    pub fn line_text(&self, line: u32) -> Option<&str> {
        self.source_map.as_ref().and_then(|sm| sm.get_line(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Position;

    fn token(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, Position::start())
    }

    #[test]
    fn test_significant_filtering() {
        let stream = TokenStream::new(vec![
            token(TokenKind::Keyword, "Si"),
            token(TokenKind::Newline, "\n"),
            token(TokenKind::Ident, "x"),
            token(TokenKind::Comment, "// nota"),
            token(TokenKind::Eof, ""),
        ]);

        assert_eq!(stream.all_tokens().len(), 5);
        assert_eq!(stream.len(), 3);
        assert!(stream.has_eof());

        let kinds: Vec<TokenKind> = stream.iter_significant().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Keyword, TokenKind::Ident, TokenKind::Comment]
        );
    }

    #[test]
    fn test_count_kind() {
        let stream = TokenStream::new(vec![
            token(TokenKind::Ident, "a"),
            token(TokenKind::Ident, "b"),
            token(TokenKind::Op, "+"),
        ]);
        assert_eq!(stream.count_kind(TokenKind::Ident), 2);
        assert_eq!(stream.count_kind(TokenKind::Op), 1);
        assert_eq!(stream.count_kind(TokenKind::Number), 0);
    }

    #[test]
    fn test_line_text_via_source_map() {
        let map = SourceMap::new("Leer x\nEscribir y\n".to_string());
        let stream = TokenStream::with_source_map(vec![], map);
        assert_eq!(stream.line_text(2), Some("Escribir y"));
    }
}
