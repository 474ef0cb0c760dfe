//! Solar production provider: measured hourly output plus a pluggable
//! 24-hour forecast strategy.

use crate::series::{HOURS_PER_DAY, YearSeries};

/// Number of hours covered by one forecast.
pub const FORECAST_HORIZON: usize = HOURS_PER_DAY;

/// Forecast strategy for the upcoming 24 hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Forecast {
    /// Reproduces the original decision rule's input exactly: element 0
    /// carries the current *hour* value, elements 1..24 are zero. This
    /// is not a production forecast — the spread rule reads element 0 as
    /// a "remaining hours today" signal. Preserved as-is because
    /// changing it changes simulated financial outcomes.
    #[default]
    HourStub,
    /// Perfect-hindsight forecast: the next 24 measured values, zero
    /// padded past the end of the series. For experimentation only.
    Persistence,
}

/// Read-only provider of measured solar production (kWh per hour),
/// backed by a full year of pre-measured values.
#[derive(Debug, Clone)]
pub struct SolarSite {
    series: YearSeries,
    forecast: Forecast,
}

impl SolarSite {
    pub fn new(series: YearSeries, forecast: Forecast) -> Self {
        Self { series, forecast }
    }

    /// The realized production for exactly (day, hour), in kWh.
    ///
    /// # Panics
    ///
    /// Panics when the backing series does not cover (day, hour); the
    /// simulation driver checks coverage once up front.
    pub fn actual(&self, day: usize, hour: usize) -> f64 {
        self.series.values()[YearSeries::flat_index(day, hour)]
    }

    /// A 24-hour forecast starting at (day, hour), per the configured
    /// strategy.
    pub fn predicted(&self, day: usize, hour: usize) -> [f64; FORECAST_HORIZON] {
        let mut out = [0.0; FORECAST_HORIZON];
        match self.forecast {
            Forecast::HourStub => {
                out[0] = hour as f64;
            }
            Forecast::Persistence => {
                for (slot, value) in out.iter_mut().zip(self.series.window(day, hour)) {
                    *slot = *value;
                }
            }
        }
        out
    }

    /// Number of hours covered by the backing series.
    pub fn hours(&self) -> usize {
        self.series.len()
    }
}
