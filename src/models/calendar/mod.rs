//! Calendar grid model.
//!
//! Computes the 6×7 month grid shown by the date picker: trailing days of the
//! previous month, every day of the viewed month, and leading days of the next
//! month, each tagged with its owning month and disabled/selected/today status.
//! Everything here is a pure function of its inputs; the grid is rebuilt from
//! scratch whenever the view or selection changes.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::utils::date::days_in_month;

/// Number of cells in a month grid (6 weeks × 7 days).
pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

/// First and last calendar years a [`ViewMonth`] may display.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Which weekday occupies the first grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WeekStart {
    Sunday = 0,
    #[default]
    Monday = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("week start must be 0 (Sunday) or 1 (Monday), got {0}")]
pub struct InvalidWeekStart(pub u8);

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Grid column (0..7) that `weekday` lands in.
    pub fn column_of(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    /// Weekdays in column order.
    pub fn weekdays(self) -> [Weekday; DAYS_PER_WEEK] {
        let mut days = [self.weekday(); DAYS_PER_WEEK];
        for i in 1..DAYS_PER_WEEK {
            days[i] = days[i - 1].succ();
        }
        days
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = InvalidWeekStart;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WeekStart::Sunday),
            1 => Ok(WeekStart::Monday),
            other => Err(InvalidWeekStart(other)),
        }
    }
}

impl From<WeekStart> for u8 {
    fn from(value: WeekStart) -> Self {
        value as u8
    }
}

/// The (year, month) currently displayed, independent of any selection.
///
/// Stored as the first day of the month so ordering and date construction
/// come straight from chrono. Months are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewMonth {
    first: NaiveDate,
}

impl ViewMonth {
    /// Returns `None` for a month outside 1..=12 or a year outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// The month containing `date`. Dates before [`MIN_YEAR`] map to its
    /// January and dates after [`MAX_YEAR`] to its December.
    pub fn of(date: NaiveDate) -> Self {
        let (year, month) = match date.year() {
            year if year < MIN_YEAR => (MIN_YEAR, 1),
            year if year > MAX_YEAR => (MAX_YEAR, 12),
            year => (year, date.month()),
        };
        Self {
            first: NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// The given day of this month, if it exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Shift by `delta` months, or `None` when the result leaves the
    /// supported year range.
    pub fn checked_shift(&self, delta: i32) -> Option<Self> {
        let total_months = self.year() * 12 + (self.month() as i32 - 1) + delta;
        let year = total_months.div_euclid(12);
        let month = (total_months.rem_euclid(12) + 1) as u32;
        Self::new(year, month)
    }

    pub fn with_year(&self, year: i32) -> Option<Self> {
        Self::new(year, self.month())
    }

    pub fn with_month(&self, month: u32) -> Option<Self> {
        Self::new(self.year(), month)
    }
}

impl From<NaiveDate> for ViewMonth {
    fn from(date: NaiveDate) -> Self {
        Self::of(date)
    }
}

impl fmt::Display for ViewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Optional inclusive minimum and maximum selectable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl Bounds {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }

    pub fn min_month(&self) -> Option<ViewMonth> {
        self.min.map(ViewMonth::of)
    }

    pub fn max_month(&self) -> Option<ViewMonth> {
        self.max.map(ViewMonth::of)
    }

    /// Whether `view` lies within the months spanned by the bounds.
    pub fn allows_month(&self, view: ViewMonth) -> bool {
        !self.min_month().is_some_and(|min| view < min)
            && !self.max_month().is_some_and(|max| view > max)
    }

    /// Replace an out-of-range month with the min month (checked first) or the
    /// max month.
    pub fn clamp_month(&self, view: ViewMonth) -> ViewMonth {
        match (self.min_month(), self.max_month()) {
            (Some(min), _) if view < min => min,
            (_, Some(max)) if view > max => max,
            _ => view,
        }
    }
}

/// Which month a grid cell belongs to, relative to the viewed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthOffset {
    Previous,
    Current,
    Next,
}

impl MonthOffset {
    pub fn delta(self) -> i32 {
        match self {
            MonthOffset::Previous => -1,
            MonthOffset::Current => 0,
            MonthOffset::Next => 1,
        }
    }
}

/// One of the 42 day slots in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Day of month (1..=31)
    pub day: u32,
    pub offset: MonthOffset,
    /// Full date the cell represents; never aliases a same-numbered day of
    /// another month
    pub date: NaiveDate,
    pub is_disabled: bool,
    pub is_selected: bool,
    pub is_today: bool,
}

impl GridCell {
    pub fn is_current_month(&self) -> bool {
        self.offset == MonthOffset::Current
    }
}

/// A fully generated month grid in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub view: ViewMonth,
    pub week_start: WeekStart,
    /// Cells taken from the previous month (also the index of day 1)
    pub leading_days: usize,
    pub days_in_month: usize,
    pub cells: Vec<GridCell>,
}

impl CalendarGrid {
    /// Build the 42-cell grid for `view`.
    ///
    /// `today` is passed in rather than read from the clock so the result
    /// depends only on its arguments.
    pub fn generate(
        view: ViewMonth,
        bounds: &Bounds,
        selected: Option<NaiveDate>,
        week_start: WeekStart,
        today: NaiveDate,
    ) -> Self {
        let first = view.first_day();
        let leading_days = week_start.column_of(first.weekday()) as usize;
        let days_in_month = view.days_in_month() as usize;

        // Start from the first grid column before day 1
        let grid_start = first - chrono::Duration::days(leading_days as i64);

        let mut cells = Vec::with_capacity(GRID_CELLS);
        let mut current = grid_start;
        for _ in 0..GRID_CELLS {
            let month_key = (current.year(), current.month());
            let offset = match month_key.cmp(&(view.year(), view.month())) {
                Ordering::Less => MonthOffset::Previous,
                Ordering::Equal => MonthOffset::Current,
                Ordering::Greater => MonthOffset::Next,
            };
            cells.push(GridCell {
                day: current.day(),
                offset,
                date: current,
                is_disabled: bounds.is_disabled(current),
                is_selected: selected == Some(current),
                is_today: current == today,
            });
            current += chrono::Duration::days(1);
        }

        Self {
            view,
            week_start,
            leading_days,
            days_in_month,
            cells,
        }
    }

    pub fn trailing_days(&self) -> usize {
        GRID_CELLS - self.leading_days - self.days_in_month
    }

    /// Cells grouped into display rows of seven.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn cell_for(&self, date: NaiveDate) -> Option<&GridCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }
}
