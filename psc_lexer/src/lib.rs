// Internal modules
pub mod config;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use grammar::{Dialect, DialectError, KeywordSet};
pub use lexical::{tokenize, tokenize_default, LexOutcome, LexerError, LexicalAnalyzer};
pub use pipeline::{analyze_source, analyze_source_default, AnalysisReport, AnalysisStatus, PipelineError};
pub use tokens::{Token, TokenKind, TokenStream};
pub use utils::{Position, SourceMap, Span};
