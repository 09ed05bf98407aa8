//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. Positions are character
//! indices (Unicode scalar values), which is also the unit used in every
//! diagnostic the scanner reports. Line and column numbers are tracked
//! alongside for error reporting.

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use clex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// assert_eq!(cursor.position(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    /// The source text, one entry per character.
    chars: Vec<char>,

    /// Current character index in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl Cursor {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character at the given offset from the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("/*");
    /// assert_eq!(cursor.peek_char(0), '/');
    /// assert_eq!(cursor.peek_char(1), '*');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.chars
            .get(self.position + offset)
            .copied()
            .unwrap_or('\0')
    }

    /// Returns true if the current and next characters are `first` and `second`.
    #[inline]
    pub fn at_pair(&self, first: char, second: char) -> bool {
        self.position + 1 < self.chars.len()
            && self.chars[self.position] == first
            && self.chars[self.position + 1] == second
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(&c) = self.chars.get(self.position) else {
            return;
        };

        self.position += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor by `count` characters, stopping at the end.
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Moves the cursor to the end of the source.
    pub fn exhaust(&mut self) {
        while !self.is_at_end() {
            self.advance();
        }
    }

    /// Returns true if the cursor has consumed the whole source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Current character index.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of characters in the source.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the source is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Collects the characters in `start..end` into a string.
    ///
    /// The range is clamped to the source.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }
}
