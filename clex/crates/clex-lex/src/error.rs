//! Lexical error kinds.
//!
//! These never abort a scan. The scanner turns each one into a diagnostic
//! and keeps going.

use clex_util::DiagnosticCode;
use thiserror::Error;

/// A lexical problem found while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A word run that is neither a keyword nor an identifier.
    #[error("Invalid token '{lexeme}' at position {position}")]
    InvalidToken {
        /// The rejected word.
        lexeme: String,
        /// Index just past the end of the word.
        position: usize,
    },

    /// A character that starts neither a symbol nor a word.
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Index of the character.
        position: usize,
    },
}

impl LexError {
    /// The diagnostic code for this error kind.
    pub const fn code(&self) -> DiagnosticCode {
        match self {
            LexError::InvalidToken { .. } => DiagnosticCode::E_LEXER_INVALID_TOKEN,
            LexError::UnexpectedChar { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
        }
    }

    /// The character index reported in the message.
    pub const fn position(&self) -> usize {
        match self {
            LexError::InvalidToken { position, .. } | LexError::UnexpectedChar { position, .. } => {
                *position
            },
        }
    }
}
