//! Common types and utilities for clext commands.
//!
//! Input collection, the output format switch and the parallel scan driver
//! are shared by `scan` and `check`.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use clex_lex::ScanResult;
use clex_util::SourceFile;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClextError, Result};

/// Input name that selects standard input.
pub const STDIN_INPUT: &str = "-";

/// Display name used for source read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

// ============================================================================
// Output Format
// ============================================================================

/// How `scan` prints its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Diagnostics, then `Tokens:` and one token per line
    #[default]
    Text,
    /// One JSON document describing every input
    Json,
}

// ============================================================================
// Inputs
// ============================================================================

/// Expands command-line inputs into source files.
///
/// A file is taken as is, a directory contributes its direct children whose
/// extension is in `extensions` (sorted by path), and `-` reads standard
/// input.
pub fn collect_sources(inputs: &[PathBuf], extensions: &[String]) -> Result<Vec<SourceFile>> {
    if inputs.is_empty() {
        return Err(ClextError::Validation("No input files specified".to_string()));
    }

    let mut sources = Vec::new();
    for input in inputs {
        if input.as_os_str() == STDIN_INPUT {
            sources.push(read_stdin()?);
        } else if input.is_dir() {
            for path in files_in_dir(input, extensions)? {
                sources.push(read_file(&path)?);
            }
        } else {
            sources.push(read_file(input)?);
        }
    }

    debug!(count = sources.len(), "collected sources");
    Ok(sources)
}

fn read_stdin() -> Result<SourceFile> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    Ok(SourceFile::new(STDIN_NAME, content))
}

fn read_file(path: &Path) -> Result<SourceFile> {
    if !path.exists() {
        return Err(ClextError::FileOperation(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ClextError::FileOperation(format!("Cannot read {}: {}", path.display(), e))
    })?;
    Ok(SourceFile::new(path.display().to_string(), content))
}

fn files_in_dir(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, extensions) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Returns true if `path` ends in one of `extensions` (given without dot).
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

// ============================================================================
// Scanning
// ============================================================================

/// One source file together with its scan result.
#[derive(Debug, Clone)]
pub struct ScannedSource {
    /// The scanned file.
    pub file: SourceFile,
    /// Tokens and diagnostics for `file`.
    pub result: ScanResult,
}

impl ScannedSource {
    /// Scans `file`.
    pub fn scan(file: SourceFile) -> Self {
        let result = clex_lex::scan(file.content());
        debug!(
            file = file.name(),
            tokens = result.tokens.len(),
            diagnostics = result.diagnostics.len(),
            "scanned"
        );
        Self { file, result }
    }
}

/// Totals over a set of scanned sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of sources scanned.
    pub files: usize,
    /// Tokens across all sources.
    pub tokens: usize,
    /// Keyword tokens among `tokens`.
    pub keywords: usize,
    /// Symbol tokens among `tokens`.
    pub symbols: usize,
    /// Diagnostics across all sources.
    pub diagnostics: usize,
}

impl ScanSummary {
    /// Adds up `sources`.
    pub fn of(sources: &[ScannedSource]) -> Self {
        sources.iter().fold(Self::default(), |acc, s| Self {
            files: acc.files + 1,
            tokens: acc.tokens + s.result.tokens.len(),
            keywords: acc.keywords + s.result.keyword_count(),
            symbols: acc.symbols + s.result.symbol_count(),
            diagnostics: acc.diagnostics + s.result.diagnostics.len(),
        })
    }
}

/// Scans every source on a pool of `jobs` worker threads.
///
/// Results keep the order of `sources`.
pub fn scan_sources(sources: Vec<SourceFile>, jobs: usize) -> Result<Vec<ScannedSource>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.max(1))
        .build()
        .map_err(|e| ClextError::Config(format!("Failed to start worker pool: {}", e)))?;

    Ok(pool.install(|| sources.into_par_iter().map(ScannedSource::scan).collect()))
}
