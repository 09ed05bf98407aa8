//! Word scanning: keywords and identifiers.

use crate::error::LexError;
use crate::token::Token;
use crate::unicode::is_word_continue;

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Accumulates a maximal run of word characters and validates it.
    ///
    /// A run that is neither a keyword nor an identifier is reported as an
    /// invalid token and the scanner resynchronizes with panic-mode
    /// recovery.
    pub fn lex_word(&mut self) -> Option<Token> {
        self.cursor.advance();
        while !self.cursor.is_at_end() && is_word_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let lexeme = self.cursor.slice(self.token_start, self.cursor.position());
        if (self.word_check)(&lexeme) {
            return Some(Token::word(lexeme, self.token_span()));
        }

        let position = self.cursor.position();
        self.report(LexError::InvalidToken { lexeme, position });
        self.recover();
        None
    }
}
