use crate::series::HOURS_PER_DAY;

/// Iterator over every (day, hour) pair of a simulated year.
///
/// Hours advance strictly in chronological order, which the simulation
/// depends on: each step's state update consumes that step's planning
/// decision.
///
/// # Examples
///
/// ```
/// use bess_sim::sim::clock::YearClock;
///
/// let steps: Vec<(usize, usize)> = YearClock::new(1).collect();
/// assert_eq!(steps.len(), 24);
/// assert_eq!(steps[0], (0, 0));
/// assert_eq!(steps[23], (0, 23));
/// ```
pub struct YearClock {
    day: usize,
    hour: usize,
    days: usize,
}

impl YearClock {
    /// Creates a clock covering `days` whole days.
    pub fn new(days: usize) -> Self {
        Self {
            day: 0,
            hour: 0,
            days,
        }
    }
}

impl Iterator for YearClock {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.day >= self.days {
            return None;
        }
        let step = (self.day, self.hour);
        self.hour += 1;
        if self.hour == HOURS_PER_DAY {
            self.hour = 0;
            self.day += 1;
        }
        Some(step)
    }
}
