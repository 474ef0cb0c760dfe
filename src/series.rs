//! Year-indexed hourly series with positional (day, hour) addressing.

pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_YEAR: usize = 365;
/// Hours in a non-leap year: 8760.
pub const HOURS_PER_YEAR: usize = HOURS_PER_DAY * DAYS_PER_YEAR;

/// An ordered sequence of hourly values for one calendar year.
///
/// Index 0 is hour 0 of day 0; the flat index for a (day, hour) pair is
/// `24 * day + hour`. Full years carry 8760 entries (8784 for leap
/// years); shorter series from partially covered boundary years are
/// accepted at load time, and looking past their end is a caller error.
/// Immutable once constructed.
///
/// # Examples
///
/// ```
/// use bess_sim::series::YearSeries;
///
/// let series = YearSeries::new(vec![1.0; 48]);
/// assert_eq!(series.get(1, 23), Some(1.0));
/// assert_eq!(series.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct YearSeries {
    values: Vec<f64>,
}

impl YearSeries {
    /// Wraps a vector of hourly values in chronological order.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Flat index of a (day, hour) pair.
    pub fn flat_index(day: usize, hour: usize) -> usize {
        HOURS_PER_DAY * day + hour
    }

    /// Number of hours covered by the series.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the series holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` when the series covers at least `days` whole days.
    pub fn covers_days(&self, days: usize) -> bool {
        self.values.len() >= days * HOURS_PER_DAY
    }

    /// Returns `true` for a full non-leap or leap year.
    pub fn is_full_year(&self) -> bool {
        self.values.len() == HOURS_PER_YEAR || self.values.len() == HOURS_PER_YEAR + HOURS_PER_DAY
    }

    /// Bounds-checked lookup of the value for one hour.
    pub fn get(&self, day: usize, hour: usize) -> Option<f64> {
        self.values.get(Self::flat_index(day, hour)).copied()
    }

    /// The up-to-24 consecutive values starting at (day, hour).
    ///
    /// Near the end of the series fewer than 24 values are returned; no
    /// wraparound or padding is performed. An out-of-range start yields
    /// an empty slice.
    pub fn window(&self, day: usize, hour: usize) -> &[f64] {
        let start = Self::flat_index(day, hour);
        let end = (start + HOURS_PER_DAY).min(self.values.len());
        if start >= self.values.len() {
            return &[];
        }
        &self.values[start..end]
    }

    /// All values in chronological order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterator over whole-day chunks of 24 values (a trailing partial
    /// day is skipped).
    pub fn days(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(HOURS_PER_DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(hours: usize) -> YearSeries {
        YearSeries::new((0..hours).map(|i| i as f64).collect())
    }

    #[test]
    fn flat_index_scheme() {
        assert_eq!(YearSeries::flat_index(0, 0), 0);
        assert_eq!(YearSeries::flat_index(0, 23), 23);
        assert_eq!(YearSeries::flat_index(1, 0), 24);
        assert_eq!(YearSeries::flat_index(364, 23), HOURS_PER_YEAR - 1);
    }

    #[test]
    fn get_is_bounds_checked() {
        let series = ramp(48);
        assert_eq!(series.get(0, 5), Some(5.0));
        assert_eq!(series.get(1, 1), Some(25.0));
        assert_eq!(series.get(2, 0), None);
    }

    #[test]
    fn window_returns_24_values_in_range() {
        let series = ramp(72);
        let w = series.window(1, 3);
        assert_eq!(w.len(), 24);
        assert_eq!(w[0], 27.0);
        assert_eq!(w[23], 50.0);
    }

    #[test]
    fn window_shortens_at_series_end() {
        let series = ramp(48);
        let w = series.window(1, 20);
        assert_eq!(w, &[44.0, 45.0, 46.0, 47.0]);
    }

    #[test]
    fn window_past_end_is_empty() {
        let series = ramp(24);
        assert!(series.window(1, 0).is_empty());
        assert!(series.window(10, 12).is_empty());
    }

    #[test]
    fn full_year_lengths() {
        assert!(ramp(HOURS_PER_YEAR).is_full_year());
        assert!(ramp(HOURS_PER_YEAR + 24).is_full_year());
        assert!(!ramp(HOURS_PER_YEAR - 24).is_full_year());
    }

    #[test]
    fn covers_days_threshold() {
        let series = ramp(48);
        assert!(series.covers_days(2));
        assert!(!series.covers_days(3));
    }

    #[test]
    fn days_iterator_skips_partial_tail() {
        let series = ramp(50);
        assert_eq!(series.days().count(), 2);
    }
}
