//! Configuration module for the clext CLI.
//!
//! Settings live in `clext.toml`. Every field has a default, so a missing
//! file or a partial file is fine; command-line flags override both.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{ClextError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "clext.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Scan-specific configuration.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Options shared by `scan` and `check`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Output format for `scan`.
    #[serde(default)]
    pub format: OutputFormat,

    /// File extensions picked up when an input is a directory.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Print the offending source line under each diagnostic.
    #[serde(default)]
    pub show_context: bool,

    /// Exit non-zero from `scan` when any diagnostic is produced.
    #[serde(default)]
    pub deny_errors: bool,

    /// Worker threads for multi-file scans.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,
}

fn default_extensions() -> Vec<String> {
    vec!["c".to_string()]
}

fn default_parallel_jobs() -> usize {
    get_num_cpus()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            scan: ScanConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            extensions: default_extensions(),
            show_context: false,
            deny_errors: false,
            jobs: default_parallel_jobs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/clext/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClextError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ClextError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("clext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("clext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
