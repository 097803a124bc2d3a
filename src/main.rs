// SPDX-License-Identifier: MIT OR Apache-2.0

//! `cfgcompat` command-line entry point.

use cfgcompat::adapters::Cli;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = cli.log_config();
    log_config.init();
    if log_config.is_verbose() {
        tracing::debug!("Verbose logging enabled.");
    }

    // Errors are logged where they are raised; only the exit status is decided here.
    match cli.version_check().and_then(|check| check.run()) {
        Ok(_) => {
            println!("Configuration version is compatible.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Version check failed ({:?})", e.kind());
            ExitCode::FAILURE
        }
    }
}
