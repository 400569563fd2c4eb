//! Analysis pipeline (dialect -> lexical -> report data)
//!
//! Single entry point for consumers: hand in source text plus a
//! dialect and get back everything a renderer or report writer needs.

mod error;
mod result;

pub use error::PipelineError;
pub use result::{AnalysisReport, AnalysisStatus};

use crate::config::constants::compile_time::source::{LARGE_SOURCE_THRESHOLD, MAX_SOURCE_SIZE};
use crate::grammar::Dialect;
use crate::lexical::{self, LexicalAnalyzer};
use crate::utils::SourceMap;
use crate::{log_info, log_warning};
use std::time::Instant;

/// Analyze a source string against a dialect.
///
/// Fails only on configuration or resource problems. A lexical error
/// is not a failure of the pipeline: it lands inside the report as an
/// `Error` outcome with the valid token prefix preserved.
pub fn analyze_source(source: &str, dialect: &Dialect) -> Result<AnalysisReport, PipelineError> {
    let start_time = Instant::now();

    if source.len() > MAX_SOURCE_SIZE {
        return Err(PipelineError::SourceTooLarge { size: source.len() });
    }
    if source.len() > LARGE_SOURCE_THRESHOLD {
        log_warning!("Large source file",
            "size_bytes" => source.len(),
            "threshold" => LARGE_SOURCE_THRESHOLD
        );
    }

    if dialect.keywords.is_empty() {
        return Err(PipelineError::Dialect(
            crate::grammar::DialectError::EmptyKeywordList {
                name: dialect.name.clone(),
            },
        ));
    }

    log_info!("Starting analysis pipeline",
        "dialect" => dialect.name,
        "keyword_count" => dialect.keywords.len(),
        "source_bytes" => source.len()
    );

    // run a metered analyzer alongside the outcome-producing pass
    let mut analyzer = LexicalAnalyzer::with_keywords(source, dialect.keyword_set());
    for _ in &mut analyzer {}
    let metrics = analyzer.metrics().clone();

    let outcome = lexical::tokenize(source, dialect.keyword_set());
    let source_map = SourceMap::new(source.to_string());

    let report = AnalysisReport {
        dialect_name: dialect.name.clone(),
        outcome,
        source_map,
        metrics,
        duration: start_time.elapsed(),
    };

    report.log_success();

    Ok(report)
}

/// Analyze with the default Spanish dialect.
pub fn analyze_source_default(source: &str) -> Result<AnalysisReport, PipelineError> {
    analyze_source(source, &Dialect::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;
    use assert_matches::assert_matches;

    #[test]
    fn test_valid_program_reports_ok() {
        let source = "Algoritmo Prueba\n    Leer x\nFinAlgoritmo\n";
        let report = analyze_source_default(source).unwrap();

        assert_eq!(report.status(), AnalysisStatus::Ok);
        assert_eq!(report.token_count(), 5);
        assert!(report.error().is_none());
        assert!(report.caret_diagram().is_none());
    }

    #[test]
    fn test_lexical_error_lands_in_report() {
        let source = "Escribir ?";
        let report = analyze_source_default(source).unwrap();

        assert_eq!(report.status(), AnalysisStatus::Error);
        let error = report.error().unwrap();
        assert_eq!((error.line(), error.column()), (1, 10));

        let diagram = report.caret_diagram().unwrap();
        assert_eq!(diagram, "Escribir ?\n         ^");
    }

    #[test]
    fn test_custom_dialect_drives_classification() {
        let dialect = Dialect {
            name: "ingles".to_string(),
            keywords: vec!["Algorithm".to_string(), "Read".to_string()],
        };
        let report = analyze_source("Algorithm Algoritmo", &dialect).unwrap();

        let kinds: Vec<TokenKind> = report
            .tokens()
            .iter()
            .filter(|t| t.is_significant())
            .map(|t| t.kind)
            .collect();
        assert_eq!(kinds, vec![TokenKind::Keyword, TokenKind::Ident]);
    }

    #[test]
    fn test_empty_keyword_list_rejected() {
        let dialect = Dialect {
            name: "vacio".to_string(),
            keywords: vec![],
        };
        let result = analyze_source("Leer x", &dialect);
        assert_matches!(result, Err(PipelineError::Dialect(_)));
    }

    #[test]
    fn test_metrics_survive_failure() {
        let report = analyze_source_default("Leer x @").unwrap();
        assert_eq!(report.metrics.keyword_tokens, 1);
        assert_eq!(report.metrics.identifier_tokens, 1);
        assert_eq!(report.metrics.invalid_chars, 1);
    }
}
