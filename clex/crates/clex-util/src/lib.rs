//! clex-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by the clex scanner and
//! its callers:
//!
//! - [`span`] - Source locations measured in characters, plus [`SourceFile`]
//!   for mapping offsets back to lines and columns.
//! - [`diagnostic`] - Error diagnostics, diagnostic codes and the
//!   [`Handler`] that collects them during a scan.
//! - [`error`] - Error types for the fallible operations in this crate.
//!
//! # Example
//!
//! ```
//! use clex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character '@' at position 3")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(3, 4, 1, 4))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};

// Diagnostics and spans travel between threads when callers scan several
// sources in parallel.
static_assertions::assert_impl_all!(Span: Copy, Send, Sync);
static_assertions::assert_impl_all!(Diagnostic: Clone, Send, Sync);
static_assertions::assert_impl_all!(SourceFile: Clone, Send, Sync);
