//! Core simulation types: run configuration and per-hour step records.

use std::fmt;

use crate::series::{DAYS_PER_YEAR, HOURS_PER_DAY};

/// Simulation run parameters.
///
/// # Examples
///
/// ```
/// use bess_sim::sim::types::SimConfig;
///
/// let cfg = SimConfig::new(365, 42);
/// assert_eq!(cfg.total_hours(), 8760);
/// ```
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of whole days to simulate.
    pub days: usize,
    /// Seed used when input series are generated synthetically.
    pub seed: u64,
}

impl SimConfig {
    /// Creates a run configuration.
    ///
    /// # Panics
    ///
    /// Panics if `days` is zero.
    pub fn new(days: usize, seed: u64) -> Self {
        assert!(days > 0, "days must be > 0");
        Self { days, seed }
    }

    /// A standard 365-day year with the given seed.
    pub fn full_year(seed: u64) -> Self {
        Self::new(DAYS_PER_YEAR, seed)
    }

    /// Total number of hourly steps.
    pub fn total_hours(&self) -> usize {
        self.days * HOURS_PER_DAY
    }
}

/// Complete record of one simulated hour.
#[derive(Debug, Clone)]
pub struct StepRecord {
    /// Day index in [0, days).
    pub day: usize,
    /// Hour of day in [0, 24).
    pub hour: usize,
    /// Day-ahead spot price for this hour (ct/kWh).
    pub price_ct: f64,
    /// Measured solar production for this hour (kWh).
    pub production_kwh: f64,
    /// Energy delta requested by the policy (kWh, signed).
    pub planned_kwh: f64,
    /// Charge movement realized after production and capacity clamping
    /// (kWh, signed).
    pub realized_kwh: f64,
    /// Battery charge after this hour (kWh).
    pub charge_kwh: f64,
    /// Cycle count after this hour.
    pub cycles: u32,
    /// Cumulative revenue after this hour (ct, signed).
    pub revenue_ct: f64,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "d{:>3} h{:>2} | price={:>6.2} ct  prod={:>7.2} kWh | \
             plan={:>+7.2}  moved={:>+7.2} | charge={:>7.1} kWh  \
             cycles={:>4}  revenue={:>10.0} ct",
            self.day,
            self.hour,
            self.price_ct,
            self.production_kwh,
            self.planned_kwh,
            self.realized_kwh,
            self.charge_kwh,
            self.cycles,
            self.revenue_ct,
        )
    }
}
