//! Accounting periods.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::ClosingError;

/// A calendar-month accounting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Creates a period.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` if the month is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, ClosingError> {
        if !(1..=12).contains(&month) {
            return Err(ClosingError::InvalidPeriod { year, month });
        }
        Ok(Self { year, month })
    }

    /// The period containing the given date.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The period's year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// The period's month (1-12).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// First day of the period.
    #[must_use]
    pub fn start_date(self) -> NaiveDate {
        // Month is validated in new()/containing().
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid period month")
    }

    /// Last day of the period - the closing boundary.
    #[must_use]
    pub fn end_date(self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("valid period month")
            .pred_opt()
            .expect("period end inside calendar range")
    }

    /// Returns true if the date falls within this period.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// The following period.
    #[must_use]
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(matches!(
            Period::new(2025, 0),
            Err(ClosingError::InvalidPeriod { .. })
        ));
        assert!(matches!(
            Period::new(2025, 13),
            Err(ClosingError::InvalidPeriod { .. })
        ));
    }

    #[rstest]
    #[case(2025, 1, 31)]
    #[case(2025, 2, 28)]
    #[case(2024, 2, 29)]
    #[case(2025, 4, 30)]
    #[case(2025, 12, 31)]
    fn test_end_date(#[case] year: i32, #[case] month: u32, #[case] last_day: u32) {
        let period = Period::new(year, month).unwrap();
        assert_eq!(period.end_date(), date(year, month, last_day));
    }

    #[test]
    fn test_contains() {
        let period = Period::new(2025, 11).unwrap();
        assert!(period.contains(date(2025, 11, 1)));
        assert!(period.contains(date(2025, 11, 30)));
        assert!(!period.contains(date(2025, 10, 31)));
        assert!(!period.contains(date(2025, 12, 1)));
    }

    #[test]
    fn test_containing() {
        assert_eq!(
            Period::containing(date(2025, 11, 9)),
            Period::new(2025, 11).unwrap()
        );
    }

    #[test]
    fn test_next_rolls_over_year() {
        assert_eq!(
            Period::new(2025, 12).unwrap().next(),
            Period::new(2026, 1).unwrap()
        );
        assert_eq!(
            Period::new(2025, 6).unwrap().next(),
            Period::new(2025, 7).unwrap()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::new(2025, 3).unwrap().to_string(), "2025-03");
    }

    #[test]
    fn test_ordering() {
        assert!(Period::new(2025, 11).unwrap() < Period::new(2025, 12).unwrap());
        assert!(Period::new(2025, 12).unwrap() < Period::new(2026, 1).unwrap());
    }
}
