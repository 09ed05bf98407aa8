//! Clext CLI - command-line front end for the clex scanner.
//!
//! Reads source files (or standard input), scans each one and prints the
//! tokens and lexical diagnostics. Argument parsing uses clap; the selected
//! subcommand is dispatched to its handler in [`commands`].

mod commands;
mod config;
mod error;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat,
    run_check, run_scan, CheckArgs, ScanArgs,
};
use config::Config;
use error::{ClextError, Result};

/// Clext - scan C-like sources into tokens and lexical diagnostics
#[derive(Parser, Debug)]
#[command(name = "clext")]
#[command(author = "Clex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan C-like sources into tokens and lexical diagnostics", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CLEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CLEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CLEXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the clext CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan sources and print their tokens
    ///
    /// Each input is a file, a directory (its direct children with a
    /// configured extension) or `-` for standard input.
    Scan(ScanOpts),

    /// Report lexical errors only
    ///
    /// Exits with a non-zero status when any input has a lexical error.
    Check(CheckOpts),
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanOpts {
    /// Files, directories or `-` for stdin
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Show the source line under each diagnostic
    #[arg(long)]
    context: bool,

    /// Exit non-zero if any diagnostic is produced
    #[arg(long)]
    deny_errors: bool,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckOpts {
    /// Files, directories or `-` for stdin
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Show the source line under each diagnostic
    #[arg(long)]
    context: bool,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<usize>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parses arguments, loads configuration, initializes logging and runs the
/// selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Events go to stderr so they never mix with scan output. `RUST_LOG`
/// overrides the default level.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ClextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Scan(opts) => run_scan(
            ScanArgs {
                inputs: opts.inputs,
                format: opts.format,
                context: opts.context,
                deny_errors: opts.deny_errors,
                jobs: opts.jobs,
            },
            config,
        ),
        Commands::Check(opts) => run_check(
            CheckArgs {
                inputs: opts.inputs,
                context: opts.context,
                jobs: opts.jobs,
            },
            config,
        ),
    }
}
