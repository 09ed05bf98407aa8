//! Token definitions and the word validity predicates.
//!
//! Tokens keep the raw lexeme. The only categories are [`TokenKind::Symbol`]
//! and [`TokenKind::Word`]; whether a word is a keyword is re-derived from
//! [`KEYWORDS`] on demand.

use std::fmt;

use clex_util::Span;

use crate::unicode::{is_digit, is_word_continue};

/// The fixed keyword set.
pub const KEYWORDS: [&str; 4] = ["int", "float", "return", "main"];

/// Token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A single character from [`crate::unicode::SYMBOLS`].
    Symbol,
    /// A keyword or identifier that passed [`is_valid_token`].
    Word,
}

impl TokenKind {
    /// Lower-case name used by renderers.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Symbol => "symbol",
            TokenKind::Word => "word",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical token: the lexeme as it appeared in the source, plus where.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// The characters making up the token. Never empty.
    pub lexeme: String,
    /// Source location of the lexeme.
    pub span: Span,
}

impl Token {
    /// Creates a symbol token.
    pub fn symbol(ch: char, span: Span) -> Self {
        Self {
            kind: TokenKind::Symbol,
            lexeme: ch.to_string(),
            span,
        }
    }

    /// Creates a word token.
    pub fn word(lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind: TokenKind::Word,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// The lexeme as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.lexeme
    }

    /// Returns true if this is a word in [`KEYWORDS`].
    pub fn is_keyword(&self) -> bool {
        self.kind == TokenKind::Word && is_keyword(&self.lexeme)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}

/// Returns true if `word` is one of the [`KEYWORDS`].
///
/// # Example
///
/// ```
/// use clex_lex::token::is_keyword;
///
/// assert!(is_keyword("return"));
/// assert!(!is_keyword("Return"));
/// assert!(!is_keyword("while"));
/// ```
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Checks the identifier shape: non-empty, no leading digit, and every
/// character a letter, digit, or underscore.
///
/// # Example
///
/// ```
/// use clex_lex::token::is_identifier;
///
/// assert!(is_identifier("_tmp1"));
/// assert!(!is_identifier("1tmp"));
/// assert!(!is_identifier(""));
/// assert!(!is_identifier("a-b"));
/// ```
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        None => false,
        Some(first) if is_digit(first) => false,
        Some(first) => is_word_continue(first) && chars.all(is_word_continue),
    }
}

/// A fully accumulated word is valid if it is a keyword or an identifier.
pub fn is_valid_token(word: &str) -> bool {
    is_keyword(word) || is_identifier(word)
}
