//! Dialect configuration loaded from TOML
//!
//! The keyword list is the only tuning knob the core accepts. A TOML
//! dialect file replaces the default list wholesale:
//!
//! ```toml
//! [dialect]
//! name = "ingles"
//! keywords = ["Algorithm", "EndAlgorithm", "Read", "Write"]
//! ```
use super::keywords::{default_keywords, KeywordSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DialectFile {
    dialect: Dialect,
}

/// A named keyword dialect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialect {
    /// Display name of the dialect
    pub name: String,
    /// Complete reserved word list (replaces the default, never merged)
    pub keywords: Vec<String>,
}

/// Dialect loading errors
#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    #[error("Invalid dialect file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Dialect '{name}' has an empty keyword list")]
    EmptyKeywordList { name: String },
}

impl Dialect {
    /// Parse a dialect from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, DialectError> {
        let file: DialectFile = toml::from_str(text)?;
        let dialect = file.dialect;
        if dialect.keywords.is_empty() {
            return Err(DialectError::EmptyKeywordList {
                name: dialect.name.clone(),
            });
        }
        Ok(dialect)
    }

    /// Build the keyword set for this dialect
    pub fn keyword_set(&self) -> KeywordSet {
        KeywordSet::new(self.keywords.iter().cloned())
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            name: "pseudocodigo".to_string(),
            keywords: default_keywords().iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_dialect_keywords() {
        let dialect = Dialect::default();
        let set = dialect.keyword_set();
        assert!(set.contains("Algoritmo"));
        assert!(set.contains("FinAlgoritmo"));
        assert_eq!(set.len(), default_keywords().len());
    }

    #[test]
    fn test_parse_dialect_toml() {
        let text = r#"
            [dialect]
            name = "ingles"
            keywords = ["Algorithm", "EndAlgorithm"]
        "#;
        let dialect = Dialect::from_toml_str(text).unwrap();
        assert_eq!(dialect.name, "ingles");
        let set = dialect.keyword_set();
        assert!(set.contains("Algorithm"));
        assert!(!set.contains("Algoritmo"));
    }

    #[test]
    fn test_empty_keyword_list_rejected() {
        let text = r#"
            [dialect]
            name = "vacio"
            keywords = []
        "#;
        let result = Dialect::from_toml_str(text);
        assert_matches!(result, Err(DialectError::EmptyKeywordList { .. }));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = Dialect::from_toml_str("not toml at all [");
        assert_matches!(result, Err(DialectError::Parse(_)));
    }
}
