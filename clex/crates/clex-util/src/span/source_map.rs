//! Source files and character offset to line/column mapping.

use std::sync::Arc;

use super::Span;
use crate::diagnostic::SourceSnippet;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and precomputed line table
///
/// # Examples
///
/// ```
/// use clex_util::span::SourceFile;
///
/// let file = SourceFile::new("main.c", "int x;\nreturn x;");
/// assert_eq!(file.name(), "main.c");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.offset_to_line_col(7), (2, 1));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Character offset at which each line starts
    line_starts: Arc<[usize]>,
    /// Byte offset at which each line starts
    line_byte_starts: Arc<[usize]>,
    /// Total number of characters
    char_len: usize,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let mut line_starts = vec![0];
        let mut line_byte_starts = vec![0];
        let mut char_len = 0;

        for (char_idx, (byte_idx, ch)) in content.char_indices().enumerate() {
            if ch == '\n' {
                line_starts.push(char_idx + 1);
                line_byte_starts.push(byte_idx + 1);
            }
            char_len = char_idx + 1;
        }

        Self {
            name: name.into(),
            content,
            line_starts: line_starts.into(),
            line_byte_starts: line_byte_starts.into(),
            char_len,
        }
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of characters in the file
    #[inline]
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.c", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a character offset to 1-based (line, column) coordinates
    ///
    /// Offsets past the end of the file are placed on the last line.
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.c", "int main");
    /// assert_eq!(file.offset_to_line_col(4), (1, 5));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line + 1, 1),
            Err(insert_point) => {
                // line_starts[0] == 0, so insert_point is at least 1 here
                let line = insert_point - 1;
                let col = offset - self.line_starts[line] + 1;
                (line + 1, col)
            },
        }
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.c", "int x;\r\nreturn x;");
    /// assert_eq!(file.line_at(1), Some("int x;"));
    /// assert_eq!(file.line_at(2), Some("return x;"));
    /// assert_eq!(file.line_at(3), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_byte_starts.get(line - 1)?;
        let end = self
            .line_byte_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Build a caret snippet for `span`
    ///
    /// The underline is clipped to the line holding `span.start`.
    pub fn snippet(&self, span: Span) -> SourceMapResult<SourceSnippet> {
        if span.start > self.char_len {
            return Err(SourceMapError::OffsetOutOfBounds {
                file_len: self.char_len,
                offset: span.start,
            });
        }

        let (line, column) = self.offset_to_line_col(span.start);
        let text = self
            .line_at(line)
            .ok_or(SourceMapError::InvalidLineNumber {
                line,
                max_lines: self.line_count(),
            })?;

        let line_len = text.chars().count();
        let end_column = (column + span.len()).min(line_len + 1).max(column);
        Ok(SourceSnippet::new(
            text,
            line,
            column,
            end_column,
            None::<String>,
        ))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .field("char_len", &self.char_len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_line_starts_count_characters() {
        // 'é' is two bytes but one character
        let file = SourceFile::new("u.c", "é x\ny");
        assert_eq!(file.char_len(), 5);
        assert_eq!(file.offset_to_line_col(2), (1, 3));
        assert_eq!(file.offset_to_line_col(4), (2, 1));
        assert_eq!(file.line_at(1), Some("é x"));
    }

    #[test]
    fn test_offset_past_end_stays_on_last_line() {
        let file = SourceFile::new("a.c", "ab\ncd");
        assert_eq!(file.offset_to_line_col(40), (2, 38));
    }

    #[test]
    fn test_empty_file() {
        let file = SourceFile::new("empty.c", "");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.char_len(), 0);
        assert_eq!(file.line_at(1), Some(""));
    }

    #[test]
    fn test_snippet_points_at_span() {
        let file = SourceFile::new("a.c", "int x;\nx = 5 @ y;");
        let snippet = file.snippet(Span::new(13, 14, 2, 7)).unwrap();
        assert_eq!(snippet.line, "x = 5 @ y;");
        assert_eq!(snippet.line_number, 2);
        assert_eq!(snippet.start_column, 7);
        assert_eq!(snippet.end_column, 8);
    }

    #[test]
    fn test_snippet_out_of_bounds() {
        let file = SourceFile::new("a.c", "int");
        let err = file.snippet(Span::new(10, 11, 1, 11)).unwrap_err();
        assert_eq!(
            err,
            SourceMapError::OffsetOutOfBounds {
                file_len: 3,
                offset: 10
            }
        );
    }

    #[quickcheck]
    fn prop_line_col_matches_naive_count(content: String, offset: usize) -> bool {
        let file = SourceFile::new("p.c", content.as_str());
        let chars: Vec<char> = content.chars().collect();
        if chars.is_empty() {
            return file.offset_to_line_col(0) == (1, 1);
        }
        let offset = offset % chars.len();

        let mut line = 1;
        let mut col = 1;
        for &ch in &chars[..offset] {
            if ch == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        file.offset_to_line_col(offset) == (line, col)
    }
}
