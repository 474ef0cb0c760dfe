//! JSON persistence for year series.
//!
//! One file per year, containing a flat JSON array of hourly values in
//! chronological order. Loading and re-saving a file reproduces the
//! identical ordered sequence.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::series::{HOURS_PER_DAY, YearSeries};

/// Reads a series from a JSON array of numbers.
///
/// # Errors
///
/// Returns an `io::Error` if the JSON is malformed or the value count
/// is not a whole number of days.
pub fn read_series(reader: impl Read) -> io::Result<YearSeries> {
    let values: Vec<f64> = serde_json::from_reader(reader)?;
    if values.len() % HOURS_PER_DAY != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "series holds {} values, expected a multiple of {HOURS_PER_DAY}",
                values.len()
            ),
        ));
    }
    Ok(YearSeries::new(values))
}

/// Writes a series as a JSON array of numbers.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_series(series: &YearSeries, writer: impl Write) -> io::Result<()> {
    serde_json::to_writer(writer, series.values())?;
    Ok(())
}

/// Loads a series file from disk.
///
/// # Errors
///
/// Returns an `io::Error` if the file cannot be opened or parsed.
pub fn load_series(path: &Path) -> io::Result<YearSeries> {
    let file = File::open(path)?;
    read_series(BufReader::new(file))
}

/// Saves a series file to disk.
///
/// # Errors
///
/// Returns an `io::Error` if the file cannot be created or written.
pub fn save_series(series: &YearSeries, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_series(series, &mut writer)?;
    writer.flush()
}
