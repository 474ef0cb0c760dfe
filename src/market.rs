//! Day-ahead price lookups over a pre-loaded year of hourly prices.

use crate::series::YearSeries;

/// Read-only provider of hourly day-ahead prices (ct/kWh).
///
/// Backed by a full year of pre-fetched prices; all lookups are pure
/// positional reads via the flat `24 * day + hour` index scheme.
#[derive(Debug, Clone)]
pub struct PriceBoard {
    series: YearSeries,
}

impl PriceBoard {
    pub fn new(series: YearSeries) -> Self {
        Self { series }
    }

    /// The next up-to-24 hourly prices starting at (day, hour).
    ///
    /// May return fewer than 24 values near the end of the backing
    /// series; callers must tolerate the short window.
    pub fn window(&self, day: usize, hour: usize) -> &[f64] {
        self.series.window(day, hour)
    }

    /// The spot price for exactly one hour.
    pub fn price_at(&self, day: usize, hour: usize) -> Option<f64> {
        self.series.get(day, hour)
    }

    /// Number of hours covered by the backing series.
    pub fn hours(&self) -> usize {
        self.series.len()
    }

    /// The backing series, for statistics over the whole year.
    pub fn series(&self) -> &YearSeries {
        &self.series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(hours: usize) -> PriceBoard {
        PriceBoard::new(YearSeries::new((0..hours).map(|i| i as f64 / 10.0).collect()))
    }

    #[test]
    fn window_starts_at_flat_index() {
        let board = board(72);
        let w = board.window(2, 1);
        assert_eq!(w.len(), 23);
        assert_eq!(w[0], 4.9);
    }

    #[test]
    fn window_is_short_near_year_end() {
        let board = board(48);
        assert_eq!(board.window(1, 22).len(), 2);
    }

    #[test]
    fn price_at_is_bounds_checked() {
        let board = board(24);
        assert_eq!(board.price_at(0, 12), Some(1.2));
        assert_eq!(board.price_at(1, 0), None);
    }
}
