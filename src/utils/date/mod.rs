// Date utility functions
// Month lengths and the ISO display format used by the trigger

use chrono::{Datelike, NaiveDate};

/// Display format for dates shown on the picker trigger (`YYYY-MM-DD`).
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// Get the number of days in a given month (1-based month), taken as the day
/// before the first of the following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
