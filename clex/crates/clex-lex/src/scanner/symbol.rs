//! Single-character symbol tokens.

use crate::token::Token;

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Emits the symbol under the cursor as a token.
    ///
    /// Symbols are always one character; `==` scans as two `=` tokens.
    pub fn lex_symbol(&mut self) -> Token {
        let ch = self.cursor.current_char();
        self.cursor.advance();
        Token::symbol(ch, self.token_span())
    }
}
