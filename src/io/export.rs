//! CSV export for hourly reading series.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::EnergyReading;

/// Column header for CSV series export.
const HEADER: &str = "timestamp,solar_kw,wind_kw,battery_kw,total_kw";

/// Exports an hourly series to a CSV file at the given path.
///
/// Writes a header row followed by one data row per reading. Produces
/// deterministic output for identical inputs.
///
/// # Arguments
///
/// * `series` - Hourly readings, oldest first
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(series: &[EnergyReading], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(series, buf)
}

/// Writes an hourly series as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(series: &[EnergyReading], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // Data rows
    for r in series {
        wtr.write_record(&[
            r.timestamp.to_rfc3339(),
            r.solar_kw.to_string(),
            r.wind_kw.to_string(),
            r.battery_kw.to_string(),
            r.total_kw().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
