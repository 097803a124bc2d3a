// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line interface.
//!
//! This module defines the arguments accepted by the `cfgcompat` binary and
//! turns them into a [`VersionCheck`] and a [`LogConfig`].

use crate::domain::{ConfigFormat, Result, VersionKey};
use crate::logging::LogConfig;
use crate::service::VersionCheck;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const USAGE_EXAMPLES: &str = "\
Examples:
  Check compatibility with a JSON config:
    cfgcompat -c config.json -a 1.0.0 -t json -k version

  Check compatibility with a YAML config:
    cfgcompat -c config.yaml -a 1.2.0 -t yaml -k config_version

  Run with verbose logging for debugging:
    cfgcompat -c config.yaml -a 1.2.0 -t yaml -k config_version -v";

/// Format tag accepted by `--config-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigType {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl From<ConfigType> for ConfigFormat {
    fn from(config_type: ConfigType) -> Self {
        match config_type {
            ConfigType::Json => ConfigFormat::Json,
            ConfigType::Yaml => ConfigFormat::Yaml,
        }
    }
}

/// Checks if the configuration file version is compatible with the application version.
///
/// # Examples
///
/// ```rust
/// use cfgcompat::adapters::Cli;
/// use clap::Parser;
///
/// let cli = Cli::parse_from(["cfgcompat", "-c", "config.json", "-a", "1.0.0", "-t", "json"]);
/// assert_eq!(cli.version_key, "version");
/// assert!(!cli.verbose);
/// ```
#[derive(Parser, Debug, Clone)]
#[command(name = "cfgcompat", version, about, long_about = None, after_help = USAGE_EXAMPLES)]
pub struct Cli {
    /// Path to the configuration file (at most 10 MiB).
    #[arg(short = 'c', long = "config")]
    pub config_file: PathBuf,

    /// The version of the running application (e.g., 1.2.3).
    #[arg(short, long)]
    pub app_version: String,

    /// The key in the configuration file that holds the version.
    #[arg(short = 'k', long, default_value = VersionKey::DEFAULT)]
    pub version_key: String,

    /// The type of the configuration file.
    #[arg(short = 't', long, value_enum)]
    pub config_type: ConfigType,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the logger configuration selected by `--verbose`.
    pub fn log_config(&self) -> LogConfig {
        LogConfig::from_verbosity(self.verbose)
    }

    /// Builds the version check described by the arguments.
    pub fn version_check(&self) -> Result<VersionCheck> {
        VersionCheck::builder()
            .config_path(&self.config_file)
            .format(self.config_type.into())
            .version_key(self.version_key.as_str())
            .app_version(self.app_version.as_str())
            .build()
    }
}
