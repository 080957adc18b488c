//! Row-by-row conversion from CSV records to rendered declarations.

use std::io::{Read, Write};

use csv::ReaderBuilder;
use log::{debug, trace};

use crate::config::OUTPUT_HEADER;
use crate::error_handling::ConvertError;
use crate::models::{DnsRecord, Entry};
use crate::render::Render;
use crate::zone::ZoneRegistry;

/// Number of declarations written by one conversion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionCounts {
    /// Distinct zones declared
    pub zones: usize,
    /// Record declarations written, one per processed row
    pub entries: usize,
}

/// Converts CSV rows from `input` into declarations written to `output`.
///
/// Writes `OUTPUT_HEADER`, then for every row: the zone declaration if the
/// row's zone has not been declared yet, followed by the record declaration.
/// Output follows input order.
///
/// The first row is always discarded as a header, whatever it contains.
/// Reading stops at the first row that cannot be read, including rows with
/// fewer than four columns or a column count different from the header's.
/// Such a row is treated exactly like end of input: the rows after it are
/// never processed and no error is returned.
///
/// # Errors
///
/// Aborts on the first row whose host has too few labels, on any render
/// failure, and on write or flush failures. Output written before the failure
/// is left in `output`.
pub fn convert<R, W, T>(
    input: R,
    output: &mut W,
    renderer: &T,
) -> Result<ConversionCounts, ConvertError>
where
    R: Read,
    W: Write,
    T: Render + ?Sized,
{
    output.write_all(OUTPUT_HEADER.as_bytes())?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    let mut zones = ZoneRegistry::new();
    let mut counts = ConversionCounts::default();

    for (index, result) in reader.records().enumerate() {
        let row = index + 1;
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                debug!("Stopped reading at data row {}: {}", row, e);
                break;
            }
        };
        let Some(record) = DnsRecord::from_row(&raw) else {
            debug!(
                "Stopped reading at data row {}: expected 4 fields, found {}",
                row,
                raw.len()
            );
            break;
        };

        let entry = Entry::new(record).map_err(|source| ConvertError::Zone { row, source })?;

        if !zones.contains(&entry.zone) {
            renderer
                .render_zone(&entry, output)
                .map_err(|source| ConvertError::Render { row, source })?;
            zones.add(&entry.zone);
            counts.zones += 1;
            debug!("Declared zone {} at data row {}", entry.zone, row);
        }

        renderer
            .render_record(&entry, output)
            .map_err(|source| ConvertError::Render { row, source })?;
        counts.entries += 1;
        trace!(
            "Rendered {} {} ({})",
            entry.record.record_type,
            entry.record.host,
            entry.fingerprint
        );
    }

    output.flush()?;
    Ok(counts)
}
