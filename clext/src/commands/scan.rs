//! Scan command implementation.
//!
//! Scans every input and prints tokens and diagnostics as text or JSON.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::commands::common::{
    collect_sources, scan_sources, OutputFormat, ScanSummary, ScannedSource,
};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{ClextError, Result};
use crate::report;

/// Arguments for the scan command.
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    /// Files, directories or `-`.
    pub inputs: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<OutputFormat>,
    /// Show source context under diagnostics.
    pub context: bool,
    /// Fail when any diagnostic is produced.
    pub deny_errors: bool,
    /// Worker thread override.
    pub jobs: Option<usize>,
}

/// Scan command handler.
pub struct ScanCommand {
    args: ScanArgs,
    config: Config,
}

impl ScanCommand {
    fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.config.scan.format)
    }

    fn jobs(&self) -> usize {
        self.args.jobs.unwrap_or(self.config.scan.jobs)
    }

    fn render(&self, scanned: &[ScannedSource]) -> Result<String> {
        match self.format() {
            OutputFormat::Text => Ok(report::render_text_all(
                scanned,
                self.args.context || self.config.scan.show_context,
            )),
            OutputFormat::Json => report::render_json(scanned).map(|json| json + "\n"),
        }
    }
}

impl Command for ScanCommand {
    type Args = ScanArgs;
    type Output = ScanSummary;

    fn new(args: ScanArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<ScanSummary> {
        let sources = collect_sources(&self.args.inputs, &self.config.scan.extensions)?;
        let scanned = scan_sources(sources, self.jobs())?;

        let output = self.render(&scanned)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;

        let summary = ScanSummary::of(&scanned);
        info!(
            files = summary.files,
            tokens = summary.tokens,
            diagnostics = summary.diagnostics,
            "{} finished",
            Self::name()
        );
        Ok(summary)
    }

    fn name() -> &'static str {
        "scan"
    }
}

/// Run the scan command.
///
/// Diagnostics are output, not failures, unless `deny_errors` is set by flag
/// or configuration.
pub fn run_scan(args: ScanArgs, config: Config) -> Result<()> {
    let deny_errors = args.deny_errors || config.scan.deny_errors;
    let summary = ScanCommand::new(args, config).execute()?;

    if deny_errors && summary.diagnostics > 0 {
        return Err(ClextError::LexicalErrors(summary.diagnostics));
    }
    Ok(())
}
