//! Conversion runs.
//!
//! `convert` is the in-memory pipeline; `run_conversion` wraps it with the
//! file handling the binary needs.

mod pipeline;

pub use pipeline::{convert, ConversionCounts};

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::config::Config;
use crate::render::TemplateRenderer;

/// Results of a conversion run.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Distinct zones declared
    pub zones: usize,
    /// Records declared
    pub entries: usize,
    /// File the declarations were written to
    pub output_path: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a conversion with the provided configuration.
///
/// Templates are loaded and checked first, then the input is opened, then
/// the output is created (truncating any previous content). The output file
/// is flushed and closed before this returns, on success and on error.
///
/// # Errors
///
/// This function will return an error if:
/// - A template file cannot be read or is invalid
/// - The input file cannot be opened
/// - The output file cannot be created or written
/// - A host has too few labels to derive its zone
///
/// # Example
///
/// ```no_run
/// use dns2tf::{run_conversion, Config};
/// use std::path::PathBuf;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config {
///     input: PathBuf::from("records.csv"),
///     output: PathBuf::from("dns.tf"),
///     ..Default::default()
/// };
/// let report = run_conversion(&config)?;
/// println!("{} zones, {} records", report.zones, report.entries);
/// # Ok(())
/// # }
/// ```
pub fn run_conversion(config: &Config) -> Result<ConversionReport> {
    let start_time = Instant::now();

    let renderer = TemplateRenderer::from_files(
        config.zone_template.as_deref(),
        config.record_template.as_deref(),
    )?;

    let input = File::open(&config.input).with_context(|| {
        format!("Failed to open input file: {}", config.input.display())
    })?;

    let output = File::create(&config.output).with_context(|| {
        format!("Failed to create output file: {}", config.output.display())
    })?;
    let mut output = BufWriter::new(output);

    info!(
        "Converting {} into {}",
        config.input.display(),
        config.output.display()
    );

    let counts = convert(input, &mut output, &renderer)
        .with_context(|| format!("Failed to convert {}", config.input.display()))?;

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    info!(
        "Wrote {} zones and {} records in {:.3}s",
        counts.zones, counts.entries, elapsed_seconds
    );

    Ok(ConversionReport {
        zones: counts.zones,
        entries: counts.entries,
        output_path: config.output.clone(),
        elapsed_seconds,
    })
}
