//! CSV export for simulation step records.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::StepRecord;

/// Column header for CSV telemetry export.
const HEADER: &str = "day,hour,price_ct_kwh,production_kwh,planned_kwh,\
                      realized_kwh,charge_kwh,cycles,revenue_ct";

/// Exports step records to a CSV file at the given path.
///
/// Writes a header row followed by one data row per simulated hour.
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(records: &[StepRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, buf)
}

/// Writes step records as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(records: &[StepRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for r in records {
        wtr.write_record(&[
            r.day.to_string(),
            r.hour.to_string(),
            format!("{:.4}", r.price_ct),
            format!("{:.4}", r.production_kwh),
            format!("{:.4}", r.planned_kwh),
            format!("{:.4}", r.realized_kwh),
            format!("{:.4}", r.charge_kwh),
            r.cycles.to_string(),
            format!("{:.4}", r.revenue_ct),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
