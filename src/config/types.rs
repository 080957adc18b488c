//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration.
///
/// Parsed from the command line by the binary, or built programmatically
/// with `..Default::default()` when the library is used directly.
///
/// # Examples
///
/// ```bash
/// # Read ./dns.csv, write ./12-dns.tf
/// dns2tf
///
/// # Custom paths
/// dns2tf records.csv --output zones.tf
///
/// # Replace the built-in record template
/// dns2tf --record-template ./templates/record.tf.tmpl
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dns2tf",
    about = "Converts a CSV list of DNS records into Terraform zone and record declarations."
)]
pub struct Config {
    /// CSV file to read (header row, then host,ttl,type,value)
    #[arg(value_parser, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Terraform file to write (created or truncated)
    #[arg(short, long, value_parser, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Template file used for managed zone declarations (built-in if omitted)
    #[arg(long, value_parser)]
    pub zone_template: Option<PathBuf>,

    /// Template file used for record set declarations (built-in if omitted)
    #[arg(long, value_parser)]
    pub record_template: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            zone_template: None,
            record_template: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
