//! Scripted adapter for the Clock port.

use chrono::NaiveDate;

use crate::ports::clock::Clock;

/// Clock pinned to a single date.
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    /// Creates a clock that always reports `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
