//! Ingestion of upstream data exports into year series.
//!
//! Production arrives as a semicolon-delimited export with one row per
//! 15-minute interval and comma-style decimal numbers; the value column
//! holds average power in kW. Market prices arrive in €/MWh and are
//! mapped to ct/kWh.

use std::io::{self, Read};

use crate::series::YearSeries;

/// Column holding the quarter-hour average power value in the export.
const POWER_COLUMN: usize = 3;

/// Quarter hours per hourly energy value.
const QUARTERS_PER_HOUR: usize = 4;

/// Maps a market price in €/MWh to ct/kWh.
pub fn eur_per_mwh_to_ct_per_kwh(price: f64) -> f64 {
    price / 10.0
}

/// Maps a whole sequence of €/MWh market prices to ct/kWh.
pub fn convert_market_prices(prices: &[f64]) -> Vec<f64> {
    prices.iter().copied().map(eur_per_mwh_to_ct_per_kwh).collect()
}

/// Reads the quarter-hour average-power column (kW) from a
/// semicolon-delimited export.
///
/// The export is known to miss the first quarter of the year (night, so
/// 0.0 is prepended) and to carry the first quarter of the following
/// year as its last row (dropped).
///
/// # Errors
///
/// Returns an `io::Error` if a row cannot be parsed or lacks the value
/// column.
pub fn read_quarter_hour_export(reader: impl Read) -> io::Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(reader);

    // missing leading quarter of the year
    let mut quarters = vec![0.0];
    for record in rdr.records() {
        let record = record.map_err(io::Error::other)?;
        let raw = record.get(POWER_COLUMN).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("row {} lacks column {POWER_COLUMN}", quarters.len()),
            )
        })?;
        let value: f64 = raw.trim().replace(',', ".").parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("row {}: invalid power value \"{raw}\": {e}", quarters.len()),
            )
        })?;
        quarters.push(value);
    }
    // trailing boundary row belongs to the next year
    quarters.pop();
    Ok(quarters)
}

/// Aggregates quarter-hour average power (kW) into hourly energy (kWh):
/// each group of four quarters contributes `power * 0.25 h`, summed.
///
/// # Errors
///
/// Returns an `io::Error` if the value count is not a multiple of four.
pub fn hourly_energy(quarters: &[f64]) -> io::Result<Vec<f64>> {
    if quarters.len() % QUARTERS_PER_HOUR != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{} quarter-hour values do not form whole hours",
                quarters.len()
            ),
        ));
    }
    Ok(quarters
        .chunks_exact(QUARTERS_PER_HOUR)
        .map(|hour| hour.iter().sum::<f64>() * 0.25)
        .collect())
}

/// Reads a quarter-hour export and aggregates it into an hourly
/// production series.
///
/// # Errors
///
/// Returns an `io::Error` on parse failures or when the aggregated
/// series is not a whole number of days.
pub fn production_series_from_export(reader: impl Read) -> io::Result<YearSeries> {
    let quarters = read_quarter_hour_export(reader)?;
    let hourly = hourly_energy(&quarters)?;
    if hourly.len() % crate::series::HOURS_PER_DAY != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} hourly values do not form whole days", hourly.len()),
        ));
    }
    Ok(YearSeries::new(hourly))
}
