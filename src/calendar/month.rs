use super::util;
use std::fmt;
use thiserror::Error;
use time::{Date, Month, Weekday};

/// A (year, month) pair denoting the month currently on display.
///
/// The year is carried as an `i64` so that [`MonthPage::add_months`] is
/// total: paging by any `i32` offset and back always returns to the
/// original page.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct MonthPage {
    year: i64,
    month: Month,
}

impl MonthPage {
    /// Validates a raw (year, month-number) pair.
    pub(crate) fn new(year: i64, month: u8) -> Result<MonthPage, InvalidMonthError> {
        match Month::try_from(month) {
            Ok(month) => Ok(MonthPage { year, month }),
            Err(_) => Err(InvalidMonthError { month }),
        }
    }

    /// Number of days in the month.
    pub(crate) fn days(&self) -> u8 {
        util::days_in_month(self.year, self.month)
    }

    /// Weekday of the first of the month.
    pub(crate) fn first_weekday(&self) -> Weekday {
        util::first_weekday(self.year, self.month)
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        self.year == i64::from(date.year()) && self.month == date.month()
    }

    /// The page `offset` months away, carrying across year boundaries.
    pub(crate) fn add_months(self, offset: i32) -> MonthPage {
        let total = self.year * 12 + i64::from(u8::from(self.month)) - 1 + i64::from(offset);
        let month = match total.rem_euclid(12) {
            0 => Month::January,
            1 => Month::February,
            2 => Month::March,
            3 => Month::April,
            4 => Month::May,
            5 => Month::June,
            6 => Month::July,
            7 => Month::August,
            8 => Month::September,
            9 => Month::October,
            10 => Month::November,
            11 => Month::December,
            _ => unreachable!(),
        };
        MonthPage {
            year: total.div_euclid(12),
            month,
        }
    }
}

impl From<Date> for MonthPage {
    fn from(date: Date) -> MonthPage {
        MonthPage {
            year: date.year().into(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("{month} does not denote a calendar month")]
pub(crate) struct InvalidMonthError {
    pub(crate) month: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_new() {
        let page = MonthPage::new(2024, 3).unwrap();
        assert_eq!(page, MonthPage::from(date!(2024 - 03 - 01)));
    }

    #[test]
    fn test_new_invalid() {
        assert_eq!(MonthPage::new(2024, 0), Err(InvalidMonthError { month: 0 }));
        assert_eq!(
            MonthPage::new(2024, 13),
            Err(InvalidMonthError { month: 13 })
        );
    }

    #[test]
    fn test_add_months_wraps_year() {
        let page = MonthPage::new(2024, 12).unwrap();
        assert_eq!(page.add_months(1), MonthPage::new(2025, 1).unwrap());
        let page = MonthPage::new(2024, 1).unwrap();
        assert_eq!(page.add_months(-1), MonthPage::new(2023, 12).unwrap());
        let page = MonthPage::new(2024, 3).unwrap();
        assert_eq!(page.add_months(25), MonthPage::new(2026, 4).unwrap());
    }

    #[test]
    fn test_add_months_round_trip() {
        let page = MonthPage::new(2024, 3).unwrap();
        for offset in [1, -1, 12, 37, 4800, 123_456, i32::MAX] {
            assert_eq!(
                page.add_months(offset).add_months(-offset),
                page,
                "round trip by {offset} months"
            );
        }
    }

    #[test]
    fn test_days() {
        assert_eq!(MonthPage::new(2024, 2).unwrap().days(), 29);
        assert_eq!(MonthPage::new(2023, 2).unwrap().days(), 28);
        assert_eq!(MonthPage::new(2024, 3).unwrap().days(), 31);
    }

    #[test]
    fn test_contains() {
        let page = MonthPage::new(2024, 3).unwrap();
        assert!(page.contains(date!(2024 - 03 - 10)));
        assert!(!page.contains(date!(2024 - 04 - 10)));
        assert!(!page.contains(date!(2023 - 03 - 10)));
    }

    #[test]
    fn test_display() {
        assert_eq!(MonthPage::new(2024, 3).unwrap().to_string(), "March 2024");
        assert_eq!(MonthPage::from(date!(2025 - 01 - 22)).to_string(), "January 2025");
    }
}
