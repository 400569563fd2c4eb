//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and
//! classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
}

impl ErrorMetadata {
    fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
        }
    }
}

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Source loading error codes
pub mod source {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E020");
    pub const UNTERMINATED_STRING: Code = Code::new("E021");
    pub const UNTERMINATED_COMMENT: Code = Code::new("E022");
    pub const IDENTIFIER_TOO_LONG: Code = Code::new("E023");
    pub const STRING_TOO_LARGE: Code = Code::new("E024");
    pub const COMMENT_TOO_LONG: Code = Code::new("E026");
    pub const TOO_MANY_TOKENS: Code = Code::new("E027");
}

/// Dialect configuration error codes
pub mod dialect {
    use super::Code;

    pub const DIALECT_PARSE_ERROR: Code = Code::new("E030");
    pub const EMPTY_KEYWORD_SET: Code = Code::new("E031");
}

/// Report generation error codes
pub mod report {
    use super::Code;

    pub const REPORT_WRITE_FAILED: Code = Code::new("E040");
    pub const REPORT_DIR_FAILED: Code = Code::new("E041");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const OPERATION_COMPLETED_SUCCESSFULLY: Code = Code::new("I001");
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const REPORT_WRITTEN: Code = Code::new("I030");
    pub const ANALYSIS_COMPLETE: Code = Code::new("I040");
}

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Critical internal system error",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "System initialization failure",
            ),
            ErrorMetadata::new(
                "E005",
                "Source",
                Severity::Medium,
                false,
                true,
                "File not found at specified path",
            ),
            ErrorMetadata::new(
                "E007",
                "Source",
                Severity::Medium,
                false,
                true,
                "File exceeds maximum size limit",
            ),
            ErrorMetadata::new(
                "E010",
                "Source",
                Severity::Medium,
                false,
                true,
                "Invalid UTF-8 encoding in file",
            ),
            ErrorMetadata::new(
                "E011",
                "Source",
                Severity::Medium,
                false,
                true,
                "I/O error during file operation",
            ),
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Character not recognized by any lexical rule",
            ),
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "String literal without a closing quote on its line",
            ),
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Block comment without a closing delimiter",
            ),
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Identifier exceeds maximum length",
            ),
            ErrorMetadata::new(
                "E024",
                "Lexical",
                Severity::Medium,
                false,
                true,
                "String literal exceeds maximum size",
            ),
            ErrorMetadata::new(
                "E026",
                "Lexical",
                Severity::Medium,
                false,
                true,
                "Comment exceeds maximum length",
            ),
            ErrorMetadata::new(
                "E027",
                "Lexical",
                Severity::High,
                false,
                true,
                "Token count limit exceeded",
            ),
            ErrorMetadata::new(
                "E030",
                "Dialect",
                Severity::Medium,
                false,
                true,
                "Dialect configuration could not be parsed",
            ),
            ErrorMetadata::new(
                "E031",
                "Dialect",
                Severity::Medium,
                false,
                true,
                "Dialect declares an empty keyword list",
            ),
            ErrorMetadata::new(
                "E040",
                "Report",
                Severity::Medium,
                true,
                false,
                "Report file could not be written",
            ),
            ErrorMetadata::new(
                "E041",
                "Report",
                Severity::Medium,
                true,
                false,
                "Report directory could not be created",
            ),
        ];

        for entry in entries {
            registry.insert(entry.code, entry);
        }

        registry
    })
}

pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|m| m.severity)
        .unwrap_or(Severity::Medium)
}

pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|m| m.category)
        .unwrap_or("Unknown")
}

pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|m| m.recoverable)
        .unwrap_or(false)
}

pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|m| m.requires_halt)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display() {
        assert_eq!(lexical::INVALID_CHARACTER.to_string(), "E020");
        assert_eq!(lexical::INVALID_CHARACTER.as_str(), "E020");
    }

    #[test]
    fn test_registry_lookup() {
        assert_eq!(get_category("E020"), "Lexical");
        assert_eq!(get_severity("ERR001"), Severity::Critical);
        assert!(is_recoverable("E021"));
        assert!(requires_halt("E027"));
    }

    #[test]
    fn test_unknown_code_fallbacks() {
        assert_eq!(get_description("E999"), "Unknown error");
        assert_eq!(get_category("E999"), "Unknown");
        assert!(!is_recoverable("E999"));
    }

    #[test]
    fn test_all_lexical_codes_registered() {
        for code in [
            lexical::INVALID_CHARACTER,
            lexical::UNTERMINATED_STRING,
            lexical::UNTERMINATED_COMMENT,
            lexical::IDENTIFIER_TOO_LONG,
            lexical::STRING_TOO_LARGE,
            lexical::COMMENT_TOO_LONG,
            lexical::TOO_MANY_TOKENS,
        ] {
            assert_ne!(get_description(code.as_str()), "Unknown error");
        }
    }
}
