//! Span module - Source location tracking.
//!
//! Offsets in a [`Span`] count characters (Unicode scalar values), not
//! bytes, so that a reported position lines up with what a reader counts
//! in the source text.
//!
//! # Examples
//!
//! ```
//! use clex_util::span::Span;
//!
//! let span = Span::new(4, 9, 1, 5);
//! assert_eq!(span.len(), 5);
//! assert_eq!(span.to_string(), "1:5");
//! ```

mod source_map;

pub use source_map::SourceFile;

/// Source location span
///
/// A half-open `[start, end)` range of character offsets together with the
/// 1-based line and column of `start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start character offset (inclusive)
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
    /// Line number of `start` (1-based)
    pub line: u32,
    /// Column number of `start` (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Placeholder span for diagnostics built without a location
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start character offset
    /// * `end` - End character offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if the span covers no characters
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Number of characters covered by the span
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
