//! Generator Configuration
//!
//! Defines the directive policy used when extracting dictionary tokens.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{DictError, DictResult};

/// Punctuation appended to every dictionary, in output order.
pub const EXTRA_TOKENS: [&str; 6] = ["{", "}", ",", "[", "]", ";"];

/// Bison directives that carry no grammar tokens.
pub const BISON_EXCLUDED_DIRECTIVES: [&str; 11] = [
    "%define",
    "%locations",
    "%name-prefix",
    "%lex-param",
    "%parse-param",
    "%initial-action",
    "%{",
    "%}",
    "%union",
    "%destructor",
    // Only declares nonterminal types, but might still be worth mining.
    "%type",
];

/// Configuration for the dictionary generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Leading character that marks a directive line.
    pub sentinel: char,

    /// Directive that ends extraction for the rest of the file.
    pub terminator: String,

    /// Directives skipped entirely. Compared exactly, sentinel included.
    pub excluded_directives: Vec<String>,

    /// Entry whose presence suppresses the whole line.
    pub suppress_marker: String,

    /// Prefix of type annotations such as `<expr>`.
    pub type_annotation_prefix: char,

    /// Tokens emitted as `extra_token` lines after the directive entries.
    pub extra_tokens: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sentinel: '%',
            terminator: "%start".to_string(),
            excluded_directives: BISON_EXCLUDED_DIRECTIVES
                .iter()
                .map(|d| d.to_string())
                .collect(),
            suppress_marker: "START_PROGRAM;".to_string(),
            type_annotation_prefix: '<',
            extra_tokens: EXTRA_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Config {
    /// Loads a JSON configuration. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> DictResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DictError::config(path, e))?;
        serde_json::from_str(&content).map_err(|e| DictError::config(path, e))
    }

    /// Parses a JSON configuration document.
    pub fn from_json(content: &str) -> DictResult<Self> {
        serde_json::from_str(content).map_err(|e| DictError::config("<inline>", e))
    }

    /// Returns true if `name` is one of the excluded directives.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_directives.iter().any(|d| d == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let config = Config::default();

        assert_eq!(config.sentinel, '%');
        assert_eq!(config.terminator, "%start");
        assert!(config.is_excluded("%type"));
        assert!(config.is_excluded("%{"));
        assert!(!config.is_excluded("%token"));
        assert_eq!(config.extra_tokens, vec!["{", "}", ",", "[", "]", ";"]);
    }

    #[test]
    fn test_exclusion_is_case_sensitive() {
        let config = Config::default();

        assert!(!config.is_excluded("%DEFINE"));
        assert!(!config.is_excluded("define"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "terminator": "%%" }"#).unwrap();

        assert_eq!(config.terminator, "%%");
        assert_eq!(config.suppress_marker, "START_PROGRAM;");
        assert_eq!(config.excluded_directives.len(), 11);
    }

    #[test]
    fn test_malformed_json() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DictError::Config { .. }));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        match Config::from_file(&path) {
            Err(DictError::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
