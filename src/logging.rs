// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger configuration.
//!
//! The log level is decided once, from the command line, and carried as a
//! `LogConfig` value until the subscriber is installed.

use std::io::IsTerminal;
use tracing::Level;

/// How the process-wide `tracing` subscriber is set up.
///
/// # Examples
///
/// ```
/// use cfgcompat::logging::LogConfig;
/// use tracing::Level;
///
/// assert_eq!(LogConfig::from_verbosity(false).level(), Level::INFO);
/// assert_eq!(LogConfig::from_verbosity(true).level(), Level::DEBUG);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    level: Level,
}

impl LogConfig {
    /// Creates a configuration that logs at `level` and above.
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// `DEBUG` when verbose, `INFO` otherwise.
    pub fn from_verbosity(verbose: bool) -> Self {
        if verbose {
            Self::new(Level::DEBUG)
        } else {
            Self::new(Level::INFO)
        }
    }

    /// Returns the most verbose level that will be emitted.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns true when debug output is enabled.
    pub fn is_verbose(&self) -> bool {
        self.level >= Level::DEBUG
    }

    /// Installs a stderr `fmt` subscriber for this configuration.
    ///
    /// Colors are only used when stderr is a terminal.
    ///
    /// Returns `false` if a global subscriber was already installed, in which
    /// case the existing one is kept.
    pub fn init(&self) -> bool {
        tracing_subscriber::fmt()
            .with_max_level(self.level)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .try_init()
            .is_ok()
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_verbosity(false)
    }
}
