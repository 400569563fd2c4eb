use crate::config::constants::compile_time::source::MAX_SOURCE_SIZE;
use crate::grammar::DialectError;
use crate::logging::{codes, Code};

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Dialect configuration failed: {0}")]
    Dialect(#[from] DialectError),

    #[error("Source too large: {size} bytes (max {MAX_SOURCE_SIZE})")]
    SourceTooLarge { size: usize },

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            PipelineError::Dialect(DialectError::Parse(_)) => codes::dialect::DIALECT_PARSE_ERROR,
            PipelineError::Dialect(DialectError::EmptyKeywordList { .. }) => {
                codes::dialect::EMPTY_KEYWORD_SET
            }
            PipelineError::SourceTooLarge { .. } => codes::source::FILE_TOO_LARGE,
            PipelineError::Pipeline { .. } => codes::system::INTERNAL_ERROR,
        }
    }
}
