//! clex-lex - Lexical scanner for a small C-like language
//!
//! This crate turns source text into a flat sequence of tokens plus a
//! sequence of lexical diagnostics. It never fails: anything it cannot accept
//! is reported and skipped.
//!
//! # Example Usage
//!
//! ```
//! use clex_lex::scan;
//!
//! let result = scan("int x = 10;\n// done\nreturn x;");
//! assert_eq!(
//!     result.lexemes(),
//!     vec!["int", "x", "=", ";", "return", "x", ";"]
//! );
//! assert_eq!(
//!     result.messages(),
//!     vec![
//!         "Lexical error: Unexpected character '1' at position 8",
//!         "Lexical error: Unexpected character '0' at position 9",
//!     ]
//! );
//! ```
//!
//! Digits cannot start a word, so each one is reported on its own and the
//! scan continues with the next character.
//!
//! # Module Structure
//!
//! - [`token`] - Token types and keyword/identifier predicates
//! - [`scanner`] - The scanner state machine and [`scan`]
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes
//! - [`result`] - The [`ScanResult`] value
//! - [`error`] - Lexical error kinds
//!
//! # Token Categories
//!
//! ## Symbols
//!
//! Exactly one character each: `[ ] { } ( ) ; , = + - * / < > ! & |`.
//! There are no multi-character operators; `==` is two `=` tokens.
//!
//! ## Words
//!
//! A letter or `_` followed by letters, digits and `_`. The words `int`,
//! `float`, `return` and `main` are keywords; every other word is an
//! identifier.
//!
//! ## Skipped input
//!
//! Whitespace, `// line comments` and `/* block comments */` (not nested).
//! A block comment that is never closed consumes the rest of the input
//! without a diagnostic.
//!
//! ## Not recognized
//!
//! Number literals, string and character literals, and every other
//! punctuation character are reported as unexpected characters.

#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod result;
pub mod scanner;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::LexError;
pub use result::{ScanResult, MESSAGE_PREFIX};
pub use scanner::{scan, Mode, Scanner, SYNC_CHARS};
pub use token::{is_identifier, is_keyword, is_valid_token, Token, TokenKind, KEYWORDS};
pub use unicode::{
    is_digit, is_letter, is_symbol, is_whitespace, is_word_continue, is_word_start, SYMBOLS,
};
