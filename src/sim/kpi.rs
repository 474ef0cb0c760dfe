//! Post-hoc ROI computation from a completed simulation run.

use std::fmt;

use crate::battery::Battery;

use super::types::StepRecord;

/// Return-on-investment figures derived from one simulated year.
///
/// Computed post-hoc from the step records and the battery's end-of-run
/// state so the reported metrics always match the telemetry.
#[derive(Debug, Clone)]
pub struct RoiReport {
    /// Revenue over the simulated span (€, signed).
    pub revenue_eur: f64,
    /// Charge/discharge cycles spent.
    pub cycles: u32,
    /// Revenue per cycle (€; 0 when no cycle was spent).
    pub revenue_per_cycle_eur: f64,
    /// Total energy moved through the battery (kWh, sum of |delta|).
    pub throughput_kwh: f64,
    /// Purchase cost of the pack (€).
    pub capex_eur: f64,
    /// Years until the pack has paid for itself at this annual revenue
    /// (infinite when revenue is not positive).
    pub payback_years: f64,
    /// Years until the rated cycle life is used up at this cycling rate
    /// (infinite when no cycle was spent).
    pub projected_life_years: f64,
    /// Revenue earned over the projected life minus capex (€). Falls
    /// back to `-capex` when the run produced no cycles or no revenue.
    pub projected_lifetime_profit_eur: f64,
}

impl RoiReport {
    /// Computes the report for one run.
    ///
    /// The simulated span is treated as one year when extrapolating
    /// payback and pack life.
    pub fn from_run(records: &[StepRecord], battery: &Battery, capex_eur: f64) -> Self {
        let throughput_kwh = records.iter().map(|r| r.realized_kwh.abs()).sum();
        let revenue_eur = battery.revenue_ct() / 100.0;
        let cycles = battery.cycles();

        let revenue_per_cycle_eur = if cycles > 0 {
            revenue_eur / f64::from(cycles)
        } else {
            0.0
        };
        let payback_years = if revenue_eur > 0.0 {
            capex_eur / revenue_eur
        } else {
            f64::INFINITY
        };
        let projected_life_years = if cycles > 0 {
            f64::from(battery.cycle_life()) / f64::from(cycles)
        } else {
            f64::INFINITY
        };
        let projected_lifetime_profit_eur = if cycles > 0 && revenue_eur > 0.0 {
            projected_life_years * revenue_eur - capex_eur
        } else {
            -capex_eur
        };

        Self {
            revenue_eur,
            cycles,
            revenue_per_cycle_eur,
            throughput_kwh,
            capex_eur,
            payback_years,
            projected_life_years,
            projected_lifetime_profit_eur,
        }
    }
}

fn fmt_years(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1} years")
    } else {
        "never".to_string()
    }
}

impl fmt::Display for RoiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- ROI Report ---")?;
        writeln!(f, "Annual revenue:       {:.2} €", self.revenue_eur)?;
        writeln!(f, "Cycles spent:         {}", self.cycles)?;
        writeln!(
            f,
            "Revenue per cycle:    {:.2} €",
            self.revenue_per_cycle_eur
        )?;
        writeln!(f, "Energy throughput:    {:.1} kWh", self.throughput_kwh)?;
        writeln!(f, "Capital cost:         {:.2} €", self.capex_eur)?;
        writeln!(f, "Payback time:         {}", fmt_years(self.payback_years))?;
        writeln!(
            f,
            "Projected pack life:  {}",
            fmt_years(self.projected_life_years)
        )?;
        write!(
            f,
            "Lifetime profit:      {:.2} €",
            self.projected_lifetime_profit_eur
        )
    }
}
