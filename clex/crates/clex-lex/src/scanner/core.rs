//! Core scanner implementation.
//!
//! This module contains the [`Scanner`] struct, the [`Mode`] state it moves
//! through, and the dispatch loop that ties the modes together.

use clex_util::{DiagnosticBuilder, Handler, Span};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{is_valid_token, Token};
use crate::unicode::{is_symbol, is_whitespace, is_word_start};

/// What the scanner does with the input at the cursor.
///
/// Modes are tried in declaration order; the first that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Skip one whitespace character.
    Whitespace,
    /// Skip `//` through the end of the line.
    LineComment,
    /// Skip `/*` through the matching `*/`.
    BlockComment,
    /// Emit a one-character symbol token.
    Symbol,
    /// Accumulate and validate a word.
    Word,
    /// Report the character and skip it.
    Unexpected,
}

/// Scanner for the C-like source language.
///
/// The scanner walks the source once, left to right. Tokens are returned
/// from [`Scanner::next_token`] (or through [`Iterator`]); diagnostics go to
/// the borrowed [`Handler`].
///
/// # Example
///
/// ```
/// use clex_lex::Scanner;
/// use clex_util::Handler;
///
/// let handler = Handler::new();
/// let mut scanner = Scanner::new("int x;", &handler);
/// assert_eq!(scanner.next_token().unwrap().lexeme, "int");
/// assert_eq!(scanner.next_token().unwrap().lexeme, "x");
/// assert_eq!(scanner.next_token().unwrap().lexeme, ";");
/// assert!(scanner.next_token().is_none());
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor,

    /// Collector for lexical diagnostics.
    handler: &'a Handler,

    /// Character index where the current token starts.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Accepts or rejects an accumulated word.
    pub(crate) word_check: fn(&str) -> bool,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            word_check: is_valid_token,
        }
    }

    /// Replaces the word validity rule.
    #[cfg(test)]
    pub(crate) fn with_word_check(mut self, check: fn(&str) -> bool) -> Self {
        self.word_check = check;
        self
    }

    /// Picks the mode for the character under the cursor, or `None` at the
    /// end of input.
    pub fn classify(&self) -> Option<Mode> {
        if self.cursor.is_at_end() {
            return None;
        }

        let c = self.cursor.current_char();
        let mode = if is_whitespace(c) {
            Mode::Whitespace
        } else if self.cursor.at_pair('/', '/') {
            Mode::LineComment
        } else if self.cursor.at_pair('/', '*') {
            Mode::BlockComment
        } else if is_symbol(c) {
            Mode::Symbol
        } else if is_word_start(c) {
            Mode::Word
        } else {
            Mode::Unexpected
        };
        Some(mode)
    }

    /// Returns the next accepted token, or `None` once the input is
    /// exhausted.
    ///
    /// Whitespace and comments are skipped. Rejected input is reported to
    /// the handler and skipped, so one call may consume many characters.
    pub fn next_token(&mut self) -> Option<Token> {
        while let Some(mode) = self.classify() {
            self.mark_token_start();

            let token = match mode {
                Mode::Whitespace => {
                    self.cursor.advance();
                    None
                },
                Mode::LineComment => {
                    self.skip_line_comment();
                    None
                },
                Mode::BlockComment => {
                    self.skip_block_comment();
                    None
                },
                Mode::Symbol => Some(self.lex_symbol()),
                Mode::Word => self.lex_word(),
                Mode::Unexpected => {
                    self.skip_unexpected();
                    None
                },
            };

            if token.is_some() {
                return token;
            }
        }

        None
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Reports a lexical error covering the current token.
    pub(crate) fn report(&self, error: LexError) {
        DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .span(self.token_span())
            .position(error.position())
            .emit(self.handler);
    }

    fn skip_unexpected(&mut self) {
        let ch = self.cursor.current_char();
        let position = self.cursor.position();
        self.cursor.advance();
        self.report(LexError::UnexpectedChar { ch, position });
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current character index in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
