//! Rendering of scan results.
//!
//! Text output mirrors a scanner display: diagnostics first, then a
//! `Tokens:` header with one token per line, then a completion marker.

use std::fmt::Write as _;

use clex_lex::MESSAGE_PREFIX;
use clex_util::Diagnostic;
use serde::Serialize;

use crate::commands::common::{ScanSummary, ScannedSource};
use crate::error::Result;

/// Header printed before the token list.
pub const TOKENS_HEADER: &str = "Tokens:";

/// Marker printed after the token list.
pub const COMPLETION_MARKER: &str = "Lexical analysis completed.";

/// Renders one source in the text format.
pub fn render_text(source: &ScannedSource, show_context: bool) -> String {
    let mut out = String::new();

    for diagnostic in &source.result.diagnostics {
        let _ = writeln!(out, "{MESSAGE_PREFIX}{}", diagnostic.message);
        if show_context {
            push_context(&mut out, source, diagnostic);
        }
    }

    let _ = writeln!(out, "{TOKENS_HEADER}");
    for token in &source.result.tokens {
        let _ = writeln!(out, "{token}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{COMPLETION_MARKER}");

    out
}

/// Renders several sources in the text format.
///
/// With more than one source, each block is preceded by a `==> name <==`
/// header.
pub fn render_text_all(sources: &[ScannedSource], show_context: bool) -> String {
    if let [single] = sources {
        return render_text(single, show_context);
    }

    let blocks: Vec<String> = sources
        .iter()
        .map(|s| format!("==> {} <==\n{}", s.file.name(), render_text(s, show_context)))
        .collect();
    blocks.join("\n")
}

/// Renders only the diagnostics of `sources`, one `name:line:col: ...` line
/// each, followed by a summary line.
pub fn render_check(sources: &[ScannedSource], show_context: bool) -> String {
    let mut out = String::new();

    for source in sources {
        for diagnostic in &source.result.diagnostics {
            let _ = writeln!(out, "{}:{}: {}", source.file.name(), diagnostic.span, diagnostic);
            if show_context {
                push_context(&mut out, source, diagnostic);
            }
        }
    }

    let summary = ScanSummary::of(sources);
    let _ = writeln!(
        out,
        "{} file(s) scanned, {} token(s) ({} keyword(s), {} symbol(s)), {} lexical error(s)",
        summary.files, summary.tokens, summary.keywords, summary.symbols, summary.diagnostics
    );

    out
}

fn push_context(out: &mut String, source: &ScannedSource, diagnostic: &Diagnostic) {
    match source.file.snippet(diagnostic.span) {
        Ok(snippet) => {
            let snippet = match diagnostic.code {
                Some(code) => snippet.with_label(code.as_str()),
                None => snippet,
            };
            let _ = writeln!(out, "{}", snippet.format());
        },
        Err(err) => tracing::debug!(%err, "no source context for diagnostic"),
    }
}

#[derive(Serialize)]
struct JsonSource<'a> {
    path: &'a str,
    tokens: Vec<JsonToken<'a>>,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonToken<'a> {
    lexeme: &'a str,
    kind: &'static str,
    start: usize,
    line: u32,
    column: u32,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: Option<String>,
    message: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> From<&'a ScannedSource> for JsonSource<'a> {
    fn from(source: &'a ScannedSource) -> Self {
        Self {
            path: source.file.name(),
            tokens: source
                .result
                .tokens
                .iter()
                .map(|t| JsonToken {
                    lexeme: &t.lexeme,
                    kind: t.kind.as_str(),
                    start: t.span.start,
                    line: t.span.line,
                    column: t.span.column,
                })
                .collect(),
            diagnostics: source
                .result
                .diagnostics
                .iter()
                .map(|d| JsonDiagnostic {
                    code: d.code.map(|c| c.as_str()),
                    message: &d.message,
                    position: d.position,
                    line: d.span.line,
                    column: d.span.column,
                })
                .collect(),
        }
    }
}

/// Renders every source as one pretty-printed JSON array.
pub fn render_json(sources: &[ScannedSource]) -> Result<String> {
    let docs: Vec<JsonSource<'_>> = sources.iter().map(JsonSource::from).collect();
    Ok(serde_json::to_string_pretty(&docs)?)
}
