//! Keyword and dialect configuration for the pseudocode language

pub mod dialect;
pub mod keywords;

pub use dialect::{Dialect, DialectError};
pub use keywords::{classify_word, Keyword, KeywordSet, WordClass};
