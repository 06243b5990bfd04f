//! CLI error types

use lexicon_explorer::LexiconError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by CLI commands
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}
