//! Bounds-constrained month navigation and day selection.
//!
//! Two policies coexist here and both are observable behaviour:
//! stepping with the previous/next buttons ([`navigate_month`]) *blocks* a
//! move that would leave the bounds, while picking a year or month from the
//! selectors ([`set_year`], [`set_month`]) *clamps* the candidate to the
//! nearest bound month.

use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

use crate::models::calendar::{Bounds, ViewMonth, MAX_YEAR, MIN_YEAR};

/// Years offered by the year selector beyond today when no max is set.
pub const OPEN_YEAR_SPAN: i32 = 10;

/// Outcome of an accepted day selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub date: NaiveDate,
    /// New view month when the day came from an adjacent month
    pub view: Option<ViewMonth>,
}

/// One entry of the month selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthOption {
    pub month: u32,
    pub is_disabled: bool,
}

/// Shift the view by `delta` months. A move that lands before the min month
/// or after the max month is a no-op.
pub fn navigate_month(view: ViewMonth, delta: i32, bounds: &Bounds) -> ViewMonth {
    match view.checked_shift(delta) {
        Some(candidate) if bounds.allows_month(candidate) => candidate,
        _ => {
            log::debug!("Blocked navigation from {} by {} month(s)", view, delta);
            view
        }
    }
}

/// Whether [`navigate_month`] would move the view.
pub fn can_navigate(view: ViewMonth, delta: i32, bounds: &Bounds) -> bool {
    delta != 0
        && view
            .checked_shift(delta)
            .is_some_and(|candidate| bounds.allows_month(candidate))
}

/// Replace the year, clamping the result into the bounds' months.
pub fn set_year(view: ViewMonth, year: i32, bounds: &Bounds) -> ViewMonth {
    match view.with_year(year) {
        Some(candidate) => bounds.clamp_month(candidate),
        None => view,
    }
}

/// Replace the month (1-based), clamping the result into the bounds' months.
pub fn set_month(view: ViewMonth, month: u32, bounds: &Bounds) -> ViewMonth {
    match view.with_month(month) {
        Some(candidate) => bounds.clamp_month(candidate),
        None => view,
    }
}

/// Select `day` of `target`. Rejected (`None`) when the day does not exist or
/// is disabled by the bounds.
pub fn select_day(
    day: u32,
    target: ViewMonth,
    current_view: ViewMonth,
    bounds: &Bounds,
) -> Option<Selection> {
    let date = target.day(day)?;
    if bounds.is_disabled(date) {
        log::debug!("Rejected selection of disabled date {}", date);
        return None;
    }

    Some(Selection {
        date,
        view: (target != current_view).then_some(target),
    })
}

/// Years listed by the year selector.
///
/// Runs from the min year (or ten years before today) to the max year (or ten
/// years after today). An open end is widened to reach the opposite bound, so
/// the bounded years are always listed even when today lies outside them.
pub fn year_options(bounds: &Bounds, today: NaiveDate) -> RangeInclusive<i32> {
    let min_year = bounds.min.map(|min| min.year());
    let max_year = bounds.max.map(|max| max.year());

    let open_start = (today.year() - OPEN_YEAR_SPAN).min(max_year.unwrap_or(i32::MAX));
    let open_end = (today.year() + OPEN_YEAR_SPAN).max(min_year.unwrap_or(i32::MIN));

    let start = min_year.unwrap_or(open_start).clamp(MIN_YEAR, MAX_YEAR);
    let end = max_year.unwrap_or(open_end).clamp(MIN_YEAR, MAX_YEAR);
    start..=end
}

/// The twelve month selector entries for the viewed year.
pub fn month_options(view: ViewMonth, bounds: &Bounds) -> Vec<MonthOption> {
    (1..=12)
        .map(|month| MonthOption {
            month,
            is_disabled: view
                .with_month(month)
                .map_or(true, |candidate| !bounds.allows_month(candidate)),
        })
        .collect()
}
