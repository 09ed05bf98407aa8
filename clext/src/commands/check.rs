//! Check command implementation.
//!
//! Prints only diagnostics and a summary line, and fails when any input has
//! a lexical error.

use std::io::Write;
use std::path::PathBuf;

use crate::commands::common::{collect_sources, scan_sources, ScanSummary};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{ClextError, Result};
use crate::report;

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files, directories or `-`.
    pub inputs: Vec<PathBuf>,
    /// Show source context under diagnostics.
    pub context: bool,
    /// Worker thread override.
    pub jobs: Option<usize>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = ScanSummary;

    fn new(args: CheckArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<ScanSummary> {
        let sources = collect_sources(&self.args.inputs, &self.config.scan.extensions)?;
        let jobs = self.args.jobs.unwrap_or(self.config.scan.jobs);
        let scanned = scan_sources(sources, jobs)?;

        let show_context = self.args.context || self.config.scan.show_context;
        let output = report::render_check(&scanned, show_context);
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;

        tracing::debug!("{} finished", Self::name());
        Ok(ScanSummary::of(&scanned))
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    let summary = CheckCommand::new(args, config).execute()?;

    if summary.diagnostics > 0 {
        return Err(ClextError::LexicalErrors(summary.diagnostics));
    }
    Ok(())
}
