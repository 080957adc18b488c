//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns2tf` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dns2tf::initialization::init_logger_with;
use dns2tf::{run_conversion, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_conversion(&config) {
        Ok(report) => {
            println!("Total zones: {}", report.zones);
            println!("Total entries: {}", report.entries);
            Ok(())
        }
        Err(e) => {
            eprintln!("dns2tf error: {:#}", e);
            process::exit(1);
        }
    }
}
