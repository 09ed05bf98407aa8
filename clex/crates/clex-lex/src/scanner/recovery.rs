//! Panic-mode error recovery.

use tracing::trace;

use super::Scanner;

/// Characters that end panic-mode recovery.
pub const SYNC_CHARS: [char; 3] = [' ', ';', '\n'];

impl<'a> Scanner<'a> {
    /// Skips forward to the next synchronizing character and steps past it.
    ///
    /// The synchronizing character itself is consumed, so a `;` that ends
    /// recovery is never emitted as a token.
    pub fn recover(&mut self) {
        let from = self.cursor.position();

        while !self.cursor.is_at_end() && !SYNC_CHARS.contains(&self.cursor.current_char()) {
            self.cursor.advance();
        }
        self.cursor.advance();

        trace!(from, to = self.cursor.position(), "panic-mode recovery");
    }
}
