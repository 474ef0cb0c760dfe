//! Descriptive statistics of price volatility: the daily spread is what
//! the arbitrage rule lives off.

use std::fmt;

use crate::series::YearSeries;

/// Maximum minus minimum price within each whole day of the series.
pub fn daily_spreads(series: &YearSeries) -> Vec<f64> {
    series
        .days()
        .map(|day| {
            let min = day.iter().copied().fold(f64::INFINITY, f64::min);
            let max = day.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            max - min
        })
        .collect()
}

/// Summary of daily price spreads over a year.
#[derive(Debug, Clone)]
pub struct SpreadReport {
    /// Number of whole days covered.
    pub days: usize,
    /// Mean daily spread (ct/kWh).
    pub mean_spread_ct: f64,
    /// Smallest daily spread (ct/kWh).
    pub min_spread_ct: f64,
    /// Largest daily spread (ct/kWh).
    pub max_spread_ct: f64,
    /// Threshold the spreads were compared against (ct/kWh).
    pub threshold_ct: f64,
    /// Days whose spread exceeds the threshold, i.e. days on which
    /// cycling the battery is economically justified.
    pub days_above_threshold: usize,
}

impl SpreadReport {
    /// Computes spread statistics for a price series against a cycling
    /// cost threshold.
    pub fn from_series(series: &YearSeries, threshold_ct: f64) -> Self {
        let spreads = daily_spreads(series);
        let days = spreads.len();
        if days == 0 {
            return Self {
                days: 0,
                mean_spread_ct: 0.0,
                min_spread_ct: 0.0,
                max_spread_ct: 0.0,
                threshold_ct,
                days_above_threshold: 0,
            };
        }

        let sum: f64 = spreads.iter().sum();
        Self {
            days,
            mean_spread_ct: sum / days as f64,
            min_spread_ct: spreads.iter().copied().fold(f64::INFINITY, f64::min),
            max_spread_ct: spreads.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            threshold_ct,
            days_above_threshold: spreads.iter().filter(|&&s| s > threshold_ct).count(),
        }
    }
}

impl fmt::Display for SpreadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Daily Price Spreads ---")?;
        writeln!(f, "Days covered:         {}", self.days)?;
        writeln!(f, "Mean spread:          {:.2} ct/kWh", self.mean_spread_ct)?;
        writeln!(f, "Min spread:           {:.2} ct/kWh", self.min_spread_ct)?;
        writeln!(f, "Max spread:           {:.2} ct/kWh", self.max_spread_ct)?;
        write!(
            f,
            "Days above {:.2} ct:   {} of {}",
            self.threshold_ct, self.days_above_threshold, self.days
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_with_spreads(spreads: &[f64]) -> YearSeries {
        // each day is flat at 10 except hour 12, which sits spread higher
        let mut values = Vec::new();
        for &spread in spreads {
            for hour in 0..24 {
                values.push(if hour == 12 { 10.0 + spread } else { 10.0 });
            }
        }
        YearSeries::new(values)
    }

    #[test]
    fn spreads_are_per_day_max_minus_min() {
        let series = series_with_spreads(&[4.0, 0.0, 9.5]);
        assert_eq!(daily_spreads(&series), vec![4.0, 0.0, 9.5]);
    }

    #[test]
    fn partial_trailing_day_is_ignored() {
        let mut values = vec![1.0; 30];
        values[10] = 6.0;
        let series = YearSeries::new(values);
        assert_eq!(daily_spreads(&series).len(), 1);
    }

    #[test]
    fn report_summarizes_and_counts_threshold_days() {
        let series = series_with_spreads(&[4.0, 2.0, 9.0, 5.0]);
        let report = SpreadReport::from_series(&series, 4.7);
        assert_eq!(report.days, 4);
        assert!((report.mean_spread_ct - 5.0).abs() < 1e-12);
        assert_eq!(report.min_spread_ct, 2.0);
        assert_eq!(report.max_spread_ct, 9.0);
        assert_eq!(report.days_above_threshold, 2);
    }

    #[test]
    fn empty_series_yields_empty_report() {
        let report = SpreadReport::from_series(&YearSeries::new(Vec::new()), 1.0);
        assert_eq!(report.days, 0);
        assert_eq!(report.days_above_threshold, 0);
    }

    #[test]
    fn display_does_not_panic() {
        let series = series_with_spreads(&[3.0]);
        let report = SpreadReport::from_series(&series, 1.0);
        assert!(format!("{report}").contains("Daily Price Spreads"));
    }
}
