//! Comment skipping.
//!
//! Comments never produce tokens. A block comment that is never closed
//! swallows the rest of the input silently.

use tracing::debug;

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Skips a `//` comment together with the newline that ends it.
    pub fn skip_line_comment(&mut self) {
        self.cursor.advance_by(2);

        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }

        self.cursor.advance();
    }

    /// Skips a `/* ... */` comment.
    ///
    /// Block comments do not nest: the first `*/` after the opener closes the
    /// comment. The opener's own `*` cannot be reused, so `/*/` is not closed.
    pub fn skip_block_comment(&mut self) {
        self.cursor.advance_by(2);

        while self.cursor.position() + 1 < self.cursor.len() && !self.cursor.at_pair('*', '/') {
            self.cursor.advance();
        }

        if self.cursor.at_pair('*', '/') {
            self.cursor.advance_by(2);
        } else {
            debug!(
                start = self.token_start,
                "unterminated block comment runs to end of input"
            );
            self.cursor.exhaust();
        }
    }
}
