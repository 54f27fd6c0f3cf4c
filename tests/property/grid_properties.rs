// Property-based tests for grid generation and navigation
// Checks the calendar invariants over random months, bounds and selections

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;
use rust_datepicker::models::calendar::{
    Bounds, CalendarGrid, MonthOffset, ViewMonth, WeekStart, GRID_CELLS,
};
use rust_datepicker::services::navigation;

fn view_month() -> impl Strategy<Value = ViewMonth> {
    (1900..2200i32, 1..=12u32).prop_map(|(year, month)| ViewMonth::new(year, month).unwrap())
}

fn week_start() -> impl Strategy<Value = WeekStart> {
    prop_oneof![Just(WeekStart::Sunday), Just(WeekStart::Monday)]
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (0..100_000i64).prop_map(|offset| NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(offset))
}

/// Bounds with min <= max, either side possibly absent
fn bounds() -> impl Strategy<Value = Bounds> {
    (prop::option::of(date()), prop::option::of(date())).prop_map(|(a, b)| match (a, b) {
        (Some(a), Some(b)) if a > b => Bounds::new(Some(b), Some(a)),
        (min, max) => Bounds::new(min, max),
    })
}

proptest! {
    /// Property: the grid always has 42 consecutive days with day 1 right
    /// after the leading days
    #[test]
    fn prop_grid_is_42_consecutive_days(
        view in view_month(),
        start in week_start(),
        today in date(),
    ) {
        let grid = CalendarGrid::generate(view, &Bounds::unbounded(), None, start, today);

        prop_assert_eq!(grid.cells.len(), GRID_CELLS);
        prop_assert!(grid.leading_days < 7);
        prop_assert_eq!(grid.cells[grid.leading_days].date, view.first_day());
        prop_assert_eq!(grid.cells[0].date.weekday(), start.weekday());
        for pair in grid.cells.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }

        let current = grid
            .cells
            .iter()
            .filter(|cell| cell.offset == MonthOffset::Current)
            .count();
        prop_assert_eq!(current as u32, view.days_in_month());
        prop_assert_eq!(
            grid.leading_days + grid.days_in_month + grid.trailing_days(),
            GRID_CELLS
        );
    }

    /// Property: a cell is disabled exactly when its date lies outside the bounds
    #[test]
    fn prop_disabled_matches_bounds(
        view in view_month(),
        bounds in bounds(),
        today in date(),
    ) {
        let grid = CalendarGrid::generate(view, &bounds, None, WeekStart::Monday, today);
        for cell in &grid.cells {
            let outside = bounds.min.is_some_and(|min| cell.date < min)
                || bounds.max.is_some_and(|max| cell.date > max);
            prop_assert_eq!(cell.is_disabled, outside);
        }
    }

    /// Property: at most one cell is selected and it carries the selected date
    #[test]
    fn prop_selection_marks_single_cell(
        view in view_month(),
        selected in date(),
        today in date(),
    ) {
        let grid = CalendarGrid::generate(view, &Bounds::unbounded(), Some(selected), WeekStart::Sunday, today);
        let marked: Vec<_> = grid.cells.iter().filter(|cell| cell.is_selected).collect();
        prop_assert!(marked.len() <= 1);
        if let Some(cell) = marked.first() {
            prop_assert_eq!(cell.date, selected);
        }
    }

    /// Property: navigating from an allowed month never leaves the allowed months
    #[test]
    fn prop_navigation_stays_in_bounds(
        bounds in bounds(),
        steps in prop::collection::vec(prop_oneof![Just(-1i32), Just(1i32)], 0..40),
    ) {
        let mut view = bounds.clamp_month(ViewMonth::new(2000, 6).unwrap());
        prop_assume!(bounds.allows_month(view));

        for delta in steps {
            let next = navigation::navigate_month(view, delta, &bounds);
            prop_assert!(bounds.allows_month(next));
            prop_assert!(next == view || next == view.checked_shift(delta).unwrap());
            view = next;
        }
    }

    /// Property: a successful selection is never a disabled date
    #[test]
    fn prop_selection_respects_bounds(
        view in view_month(),
        bounds in bounds(),
        day in 1..=31u32,
        offset in -1..=1i32,
    ) {
        let target = view.checked_shift(offset).unwrap();
        if let Some(selection) = navigation::select_day(day, target, view, &bounds) {
            prop_assert!(!bounds.is_disabled(selection.date));
            prop_assert_eq!(ViewMonth::of(selection.date), target);
        }
    }
}
