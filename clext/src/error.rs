//! Error handling module for the clext CLI.
//!
//! Lexical problems are not errors here: they are reported as diagnostics.
//! Only `check` and `--deny-errors` turn them into [`ClextError::LexicalErrors`]
//! so the process exits non-zero.

use thiserror::Error;

/// Main error type for the clext CLI application.
#[derive(Error, Debug)]
pub enum ClextError {
    /// Error when the configuration cannot be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file or directory cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when command-line input is unusable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Scanning produced diagnostics and the command treats them as fatal.
    #[error("{0} lexical error(s) found")]
    LexicalErrors(usize),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ClextError.
pub type Result<T> = std::result::Result<T, ClextError>;
