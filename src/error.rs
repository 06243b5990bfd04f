//! Error types for lexicon loading and navigation
//!
//! The introspection operations themselves (normalize, count, resolve, tag,
//! toggle) are total. Errors only surface when reading documents, catalogs and
//! configuration, or when strict reference navigation is enabled.

use thiserror::Error;

/// Errors that can occur while loading or navigating lexicon documents
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexiconError {
    /// JSON or YAML parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// Document id not present in the store
    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    /// Reference whose document segment matches no known document
    #[error("Unresolved reference: {reference}")]
    UnresolvedReference { reference: String },

    /// Catalog entry is malformed or inconsistent
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl From<serde_json::Error> for LexiconError {
    fn from(e: serde_json::Error) -> Self {
        LexiconError::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for LexiconError {
    fn from(e: serde_yaml::Error) -> Self {
        LexiconError::Parse(e.to_string())
    }
}

impl From<std::io::Error> for LexiconError {
    fn from(e: std::io::Error) -> Self {
        LexiconError::Io(e.to_string())
    }
}
