//! The value returned by [`crate::scan`].

use clex_util::Diagnostic;

use crate::token::{Token, TokenKind};

/// Prefix placed in front of every rendered lexical diagnostic.
pub const MESSAGE_PREFIX: &str = "Lexical error: ";

/// Tokens and diagnostics produced by one complete pass over a source text.
///
/// Both sequences are in source order. The result owns everything and holds
/// no reference back to the scanner or the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Accepted tokens, comments and whitespace removed.
    pub tokens: Vec<Token>,
    /// Lexical diagnostics in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanResult {
    /// The token lexemes, in order.
    ///
    /// # Example
    ///
    /// ```
    /// let result = clex_lex::scan("int x;");
    /// assert_eq!(result.lexemes(), vec!["int", "x", ";"]);
    /// ```
    pub fn lexemes(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::as_str).collect()
    }

    /// Each diagnostic rendered as `Lexical error: <message>`.
    ///
    /// # Example
    ///
    /// ```
    /// let result = clex_lex::scan("a # b");
    /// assert_eq!(
    ///     result.messages(),
    ///     vec!["Lexical error: Unexpected character '#' at position 2"]
    /// );
    /// ```
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .iter()
            .map(|d| format!("{MESSAGE_PREFIX}{}", d.message))
            .collect()
    }

    /// Returns true if any diagnostic was produced.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Number of word tokens that are keywords.
    pub fn keyword_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_keyword()).count()
    }

    /// Number of single-character symbol tokens.
    pub fn symbol_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Symbol)
            .count()
    }
}
