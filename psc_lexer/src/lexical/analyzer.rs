//! Core lexical analyzer
//!
//! Pull-based tokenization over an in-memory source string. The
//! analyzer is an iterator of `Result<Token, LexerError>`: callers can
//! stream tokens lazily, and the `tokenize` driver collects them into
//! a `LexOutcome` that keeps the valid prefix even when analysis stops
//! at an illegal character.

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::grammar::{classify_word, KeywordSet, WordClass};
use crate::lexical::rules::{self, DelimitedMatch};
use crate::logging::codes;
use crate::tokens::{Token, TokenKind, TokenStream};
use crate::utils::Position;
use crate::{log_debug, log_error, log_success};

/// Lexical analysis errors with compile-time security boundaries.
/// Every variant records where analysis stopped (1-based line/column).
#[derive(Debug, Clone, thiserror::Error)]
pub enum LexerError {
    #[error("Carácter no válido: '{character}' (línea {line}, columna {column})")]
    InvalidCharacter {
        character: char,
        line: u32,
        column: u32,
    },

    #[error("Cadena sin cerrar (línea {line}, columna {column})")]
    UnterminatedString { line: u32, column: u32 },

    #[error("Comentario de bloque sin cerrar (línea {line}, columna {column})")]
    UnterminatedComment { line: u32, column: u32 },

    #[error("Identificador demasiado largo: {length} caracteres (máximo {MAX_IDENTIFIER_LENGTH})")]
    IdentifierTooLong { length: usize, line: u32, column: u32 },

    #[error("Cadena demasiado grande: {size} bytes (máximo {MAX_STRING_SIZE})")]
    StringTooLarge { size: usize, line: u32, column: u32 },

    #[error("Comentario demasiado largo: {length} caracteres (máximo {MAX_COMMENT_LENGTH})")]
    CommentTooLong { length: usize, line: u32, column: u32 },

    #[error("Demasiados tokens: {count} (máximo {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize, line: u32, column: u32 },
}

impl LexerError {
    pub fn line(&self) -> u32 {
        match self {
            LexerError::InvalidCharacter { line, .. }
            | LexerError::UnterminatedString { line, .. }
            | LexerError::UnterminatedComment { line, .. }
            | LexerError::IdentifierTooLong { line, .. }
            | LexerError::StringTooLarge { line, .. }
            | LexerError::CommentTooLong { line, .. }
            | LexerError::TooManyTokens { line, .. } => *line,
        }
    }

    pub fn column(&self) -> u32 {
        match self {
            LexerError::InvalidCharacter { column, .. }
            | LexerError::UnterminatedString { column, .. }
            | LexerError::UnterminatedComment { column, .. }
            | LexerError::IdentifierTooLong { column, .. }
            | LexerError::StringTooLarge { column, .. }
            | LexerError::CommentTooLong { column, .. }
            | LexerError::TooManyTokens { column, .. } => *column,
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::UnterminatedString { .. } => codes::lexical::UNTERMINATED_STRING,
            LexerError::UnterminatedComment { .. } => codes::lexical::UNTERMINATED_COMMENT,
            LexerError::IdentifierTooLong { .. } => codes::lexical::IDENTIFIER_TOO_LONG,
            LexerError::StringTooLarge { .. } => codes::lexical::STRING_TOO_LARGE,
            LexerError::CommentTooLong { .. } => codes::lexical::COMMENT_TOO_LONG,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }
}

/// Essential lexical analysis metrics with runtime preferences
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub operator_tokens: usize,
    pub number_tokens: usize,
    pub string_tokens: usize,
    pub comment_count: usize,
    pub invalid_chars: usize,
    pub max_string_length: usize,
    pub max_comment_length: usize,

    // Only counted when include_all_tokens_in_counts is set
    pub marker_tokens: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        match token.kind {
            TokenKind::Keyword | TokenKind::Boolean => self.keyword_tokens += 1,
            TokenKind::Ident => self.identifier_tokens += 1,
            TokenKind::Op | TokenKind::Group => self.operator_tokens += 1,
            TokenKind::Number => self.number_tokens += 1,
            TokenKind::String => {
                self.string_tokens += 1;
                self.record_string_length(token.width(), preferences);
            }
            TokenKind::Comment => {
                self.comment_count += 1;
                self.max_comment_length = self.max_comment_length.max(token.width());
            }
            TokenKind::Newline | TokenKind::Eof => {
                if preferences.include_all_tokens_in_counts {
                    self.marker_tokens += 1;
                }
            }
            TokenKind::Error => self.invalid_chars += 1,
        }
    }

    fn record_string_length(&mut self, length: usize, preferences: &LexicalPreferences) {
        self.max_string_length = self.max_string_length.max(length);

        if preferences.log_string_statistics {
            log_debug!("String literal processed",
                "length" => length,
                "max_so_far" => self.max_string_length
            );
        }
    }

    pub(crate) fn record_invalid_char(&mut self) {
        self.invalid_chars += 1;
    }
}

/// Pull-based lexical analyzer over a source string.
///
/// Rules are tried in a fixed priority order (newline, whitespace,
/// comments, strings, numbers, grouping, operators, identifiers) and
/// each rule takes the longest match it can. Whitespace other than
/// newlines is trivia and produces no token; newlines surface as
/// `Newline` marker tokens and the end of input as a single `Eof`.
pub struct LexicalAnalyzer<'src> {
    source: &'src str,
    pos: Position,
    keywords: KeywordSet,
    preferences: LexicalPreferences,
    metrics: LexicalMetrics,
    token_count: usize,
    eof_emitted: bool,
    failed: bool,
}

impl<'src> LexicalAnalyzer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_keywords(source, KeywordSet::default())
    }

    pub fn with_keywords(source: &'src str, keywords: KeywordSet) -> Self {
        Self {
            source,
            pos: Position::start(),
            keywords,
            preferences: LexicalPreferences::default(),
            metrics: LexicalMetrics::default(),
            token_count: 0,
            eof_emitted: false,
            failed: false,
        }
    }

    pub fn with_preferences(mut self, preferences: LexicalPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Position of the next unconsumed character.
    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        let text = &self.source[start.offset..start.offset + len];
        let token = Token::new(kind, text.to_string(), start);
        self.metrics.record_token(&token, &self.preferences);
        self.pos = start.advance_str(text);
        self.token_count += 1;
        token
    }

    fn fail(&mut self, error: LexerError) -> Result<Token, LexerError> {
        self.failed = true;

        let message = if self.preferences.include_position_in_errors {
            format!(
                "Lexical analysis failed at line {}, column {}",
                error.line(),
                error.column()
            )
        } else {
            "Lexical analysis failed".to_string()
        };
        log_error!(error.error_code(), &message,
            "line" => error.line(),
            "column" => error.column(),
            "tokens_processed" => self.token_count
        );

        Err(error)
    }
}

impl Iterator for LexicalAnalyzer<'_> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let source = self.source;
        loop {
            let rest = &source[self.pos.offset..];

            if rest.is_empty() {
                if self.eof_emitted {
                    return None;
                }
                self.eof_emitted = true;
                return Some(Ok(self.emit(TokenKind::Eof, 0)));
            }

            if self.token_count >= MAX_TOKEN_COUNT {
                return Some(self.fail(LexerError::TooManyTokens {
                    count: self.token_count,
                    line: self.pos.line,
                    column: self.pos.column,
                }));
            }

            if let Some(len) = rules::match_newline(rest) {
                return Some(Ok(self.emit(TokenKind::Newline, len)));
            }

            if let Some(len) = rules::match_whitespace(rest) {
                self.pos = self.pos.advance_str(&rest[..len]);
                continue;
            }

            if let Some(len) = rules::match_line_comment(rest) {
                let chars = rest[..len].chars().count();
                if chars > MAX_COMMENT_LENGTH {
                    return Some(self.fail(LexerError::CommentTooLong {
                        length: chars,
                        line: self.pos.line,
                        column: self.pos.column,
                    }));
                }
                return Some(Ok(self.emit(TokenKind::Comment, len)));
            }

            if let Some(m) = rules::match_block_comment(rest) {
                match m {
                    DelimitedMatch::Complete(len) => {
                        let chars = rest[..len].chars().count();
                        if chars > MAX_COMMENT_LENGTH {
                            return Some(self.fail(LexerError::CommentTooLong {
                                length: chars,
                                line: self.pos.line,
                                column: self.pos.column,
                            }));
                        }
                        return Some(Ok(self.emit(TokenKind::Comment, len)));
                    }
                    DelimitedMatch::Unterminated => {
                        return Some(self.fail(LexerError::UnterminatedComment {
                            line: self.pos.line,
                            column: self.pos.column,
                        }));
                    }
                }
            }

            if let Some(m) = rules::match_string(rest) {
                match m {
                    DelimitedMatch::Complete(len) => {
                        if len > MAX_STRING_SIZE {
                            return Some(self.fail(LexerError::StringTooLarge {
                                size: len,
                                line: self.pos.line,
                                column: self.pos.column,
                            }));
                        }
                        return Some(Ok(self.emit(TokenKind::String, len)));
                    }
                    DelimitedMatch::Unterminated => {
                        return Some(self.fail(LexerError::UnterminatedString {
                            line: self.pos.line,
                            column: self.pos.column,
                        }));
                    }
                }
            }

            if let Some(len) = rules::match_number(rest) {
                return Some(Ok(self.emit(TokenKind::Number, len)));
            }

            if let Some(len) = rules::match_group(rest) {
                return Some(Ok(self.emit(TokenKind::Group, len)));
            }

            if let Some(len) = rules::match_operator(rest) {
                return Some(Ok(self.emit(TokenKind::Op, len)));
            }

            if let Some(len) = rules::match_identifier(rest) {
                let chars = rest[..len].chars().count();
                if chars > MAX_IDENTIFIER_LENGTH {
                    return Some(self.fail(LexerError::IdentifierTooLong {
                        length: chars,
                        line: self.pos.line,
                        column: self.pos.column,
                    }));
                }
                let kind = match classify_word(&rest[..len], &self.keywords) {
                    WordClass::Keyword => TokenKind::Keyword,
                    WordClass::Boolean => TokenKind::Boolean,
                    WordClass::Identifier => TokenKind::Ident,
                };
                return Some(Ok(self.emit(kind, len)));
            }

            // no rule matched: first illegal character
            let character = match rest.chars().next() {
                Some(c) => c,
                None => continue,
            };
            self.metrics.record_invalid_char();
            return Some(self.fail(LexerError::InvalidCharacter {
                character,
                line: self.pos.line,
                column: self.pos.column,
            }));
        }
    }
}

/// Result of a full tokenization pass. Analysis stops at the first
/// error but the tokens recognized before it are kept, so callers can
/// still highlight the valid prefix.
#[derive(Debug)]
pub enum LexOutcome {
    Success(TokenStream),
    Failure {
        partial: Vec<Token>,
        error: LexerError,
    },
}

impl LexOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LexOutcome::Success(_))
    }

    /// Tokens recognized so far, complete or not.
    pub fn tokens(&self) -> &[Token] {
        match self {
            LexOutcome::Success(stream) => stream.all_tokens(),
            LexOutcome::Failure { partial, .. } => partial,
        }
    }

    pub fn error(&self) -> Option<&LexerError> {
        match self {
            LexOutcome::Success(_) => None,
            LexOutcome::Failure { error, .. } => Some(error),
        }
    }
}

/// Tokenize a complete source string against a keyword set.
pub fn tokenize(source: &str, keywords: KeywordSet) -> LexOutcome {
    log_debug!("Starting lexical analysis",
        "source_bytes" => source.len(),
        "keyword_count" => keywords.len(),
        "max_tokens_allowed" => MAX_TOKEN_COUNT
    );

    let mut analyzer = LexicalAnalyzer::with_keywords(source, keywords);
    let mut tokens = Vec::new();

    for item in &mut analyzer {
        match item {
            Ok(token) => tokens.push(token),
            Err(error) => {
                return LexOutcome::Failure {
                    partial: tokens,
                    error,
                };
            }
        }
    }

    let metrics = analyzer.metrics();
    let stream = TokenStream::new(tokens);
    log_success!(codes::success::TOKENIZATION_COMPLETE,
        "Lexical analysis completed successfully",
        "token_count" => stream.len(),
        "keywords" => metrics.keyword_tokens,
        "identifiers" => metrics.identifier_tokens,
        "operators" => metrics.operator_tokens,
        "comments" => metrics.comment_count,
        "max_string_length" => metrics.max_string_length
    );

    LexOutcome::Success(stream)
}

/// Tokenize with the default Spanish keyword set.
pub fn tokenize_default(source: &str) -> LexOutcome {
    tokenize(source, KeywordSet::default())
}
