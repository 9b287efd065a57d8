//! Where the menu gets "today" from.

use chrono::{Local, NaiveDate};

/// Source of "today" for expiry queries.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Clock {
    /// Local calendar date at the time of each call.
    System,
    /// Pinned date (tests, replaying a session).
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_stable() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(Clock::Fixed(d).today(), d);
    }
}
