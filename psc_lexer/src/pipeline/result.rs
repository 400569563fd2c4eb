use crate::lexical::{LexOutcome, LexerError, LexicalMetrics};
use crate::logging::codes;
use crate::log_success;
use crate::tokens::Token;
use crate::utils::SourceMap;
use std::time::Duration;

/// Overall verdict of an analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    Ok,
    Error,
}

impl AnalysisStatus {
    /// Report-file spelling of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStatus::Ok => "OK",
            AnalysisStatus::Error => "ERROR",
        }
    }
}

/// Complete result of analyzing one source, error or not.
///
/// A lexical error is data here rather than an early return: the
/// report keeps the tokens recognized before the failure so callers
/// can still highlight the valid prefix and point at the offender.
#[derive(Debug)]
pub struct AnalysisReport {
    pub dialect_name: String,
    pub outcome: LexOutcome,
    pub source_map: SourceMap,
    pub metrics: LexicalMetrics,
    pub duration: Duration,
}

impl AnalysisReport {
    pub fn status(&self) -> AnalysisStatus {
        if self.outcome.is_success() {
            AnalysisStatus::Ok
        } else {
            AnalysisStatus::Error
        }
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_success()
    }

    /// Tokens recognized so far, markers included.
    pub fn tokens(&self) -> &[Token] {
        self.outcome.tokens()
    }

    /// Processed token count, newline and EOF markers excluded.
    pub fn token_count(&self) -> usize {
        self.tokens().iter().filter(|t| t.is_significant()).count()
    }

    pub fn error(&self) -> Option<&LexerError> {
        self.outcome.error()
    }

    /// Two-line caret diagram pointing at the error position.
    pub fn caret_diagram(&self) -> Option<String> {
        let error = self.error()?;
        self.source_map.caret_diagram(error.line(), error.column())
    }

    pub fn log_success(&self) {
        log_success!(codes::success::ANALYSIS_COMPLETE,
            "Analysis completed",
            "dialect" => self.dialect_name,
            "status" => self.status().as_str(),
            "token_count" => self.token_count(),
            "duration_ms" => format!("{:.2}", self.duration.as_secs_f64() * 1000.0)
        );
    }
}
