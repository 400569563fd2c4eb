//! Lexical analysis for pseudocode sources

pub mod analyzer;
mod rules;

pub use analyzer::{
    tokenize, tokenize_default, LexOutcome, LexerError, LexicalAnalyzer, LexicalMetrics,
};
