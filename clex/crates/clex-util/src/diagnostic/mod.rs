//! Diagnostic module - Error reporting infrastructure.
//!
//! Diagnostics are plain data: the scanner emits them into a [`Handler`]
//! while it runs, and callers receive them afterwards to render however they
//! like. Every diagnostic is an error; there are no warnings or notes.
//!
//! # Examples
//!
//! ```
//! use clex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use clex_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character '$' at position 2")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(2, 3, 1, 3))
//!     .emit(&handler);
//!
//! let diags = handler.into_diagnostics();
//! assert_eq!(diags[0].to_string(), "error[E1001]: Unexpected character '$' at position 2");
//! assert_eq!(diags[0].position, 2);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// A located error message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source region the message is about
    pub span: Span,
    /// Character offset quoted by the message
    ///
    /// Usually `span.start`. A diagnostic about a whole token may quote the
    /// offset just past it instead.
    pub position: usize,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create an error diagnostic positioned at the start of `span`
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            position: span.start,
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{}]: {}", code, self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

/// Handler for collecting diagnostics during a single scan
///
/// A handler is cheap to create and is not meant to be shared between
/// threads; each scan owns one.
///
/// # Examples
///
/// ```
/// use clex_util::diagnostic::{Diagnostic, Handler};
/// use clex_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("bad input", Span::DUMMY));
/// assert!(handler.has_errors());
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics, in emission order
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get a copy of all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consume the handler and return its diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}
