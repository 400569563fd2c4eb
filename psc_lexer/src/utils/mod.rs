//! Shared utilities for the PSC lexer

mod span;

pub use span::{Position, SourceMap, Span};
