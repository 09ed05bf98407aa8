//! The scanner state machine and the [`scan`] entry point.
//!
//! The scanner is split by concern:
//! - `core`: the [`Scanner`] struct, mode selection and dispatch
//! - `comment`: line and block comment skipping
//! - `symbol`: one-character symbol tokens
//! - `word`: keyword and identifier accumulation
//! - `recovery`: panic-mode resynchronization

mod comment;
mod core;
mod recovery;
mod symbol;
mod word;

use clex_util::Handler;
use tracing::debug;

use crate::result::ScanResult;
use crate::token::Token;

pub use self::core::{Mode, Scanner};
pub use self::recovery::SYNC_CHARS;

/// Scans `source` into tokens and diagnostics.
///
/// Scanning never fails: everything the scanner rejects is reported as a
/// diagnostic and skipped. Each call is independent, so the same input
/// always produces the same result.
///
/// # Example
///
/// ```
/// use clex_lex::scan;
///
/// let result = scan("x = 5 @ y;");
/// assert_eq!(result.lexemes(), vec!["x", "=", "y", ";"]);
/// assert_eq!(result.diagnostics.len(), 2);
/// ```
pub fn scan(source: &str) -> ScanResult {
    let handler = Handler::new();
    let tokens: Vec<Token> = Scanner::new(source, &handler).collect();
    let diagnostics = handler.into_diagnostics();

    debug!(
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        "scan complete"
    );

    ScanResult {
        tokens,
        diagnostics,
    }
}
