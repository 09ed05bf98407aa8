//! Command modules for the clext CLI.
//!
//! Each subcommand is implemented in its own file and exposes a `run_*`
//! entry point used by `main`.

pub mod common;
pub mod traits;

pub mod check;
pub mod scan;

pub use check::{run_check, CheckArgs};
pub use scan::{run_scan, ScanArgs};
