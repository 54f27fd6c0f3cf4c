// Test fixtures - reusable test data
// Provides consistent dates, months and bounds across the test files

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_datepicker::models::calendar::{Bounds, ViewMonth};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Leap day 2024, a Thursday
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Feb 14, 2025 (Valentine's Day)
    pub fn valentine_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    /// Dec 31, 2024 (New Year's Eve)
    pub fn new_years_eve_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

/// Sample viewed months
pub mod months {
    use super::*;

    /// February 2024: starts on a Thursday, 29 days
    pub fn feb_2024() -> ViewMonth {
        ViewMonth::new(2024, 2).unwrap()
    }

    /// September 2024: starts on a Sunday
    pub fn sep_2024() -> ViewMonth {
        ViewMonth::new(2024, 9).unwrap()
    }
}

/// Sample selectable ranges
pub mod bounds {
    use super::*;

    /// Jan 30 through Mar 1, 2024: cuts into both edges of the February grid
    pub fn around_feb_2024() -> Bounds {
        Bounds::new(Some(dates::ymd(2024, 1, 30)), Some(dates::ymd(2024, 3, 1)))
    }

    /// The default lower limit of the picker with no upper limit
    pub fn since_epoch() -> Bounds {
        Bounds::new(Some(dates::ymd(1970, 1, 1)), None)
    }
}
