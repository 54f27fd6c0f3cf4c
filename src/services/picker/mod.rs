//! Stateful date picker controller.
//!
//! Owns the viewed month and the selection and routes every mutation through
//! the pure functions in [`crate::services::navigation`]. The egui widget is a
//! thin layer over this type, so everything a user can do is testable here
//! without a UI context.

use chrono::NaiveDate;

use crate::models::calendar::{Bounds, CalendarGrid, MonthOffset, ViewMonth, WeekStart};
use crate::models::settings::DatePickerSettings;
use crate::services::locale::{CalendarLabels, LabelFormatter, LocaleService, LocaleTag};
use crate::services::navigation::{self, MonthOption};
use crate::services::preferences::PreferenceStore;
use crate::utils::date::format_display_date;

/// Notifications for the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// Any change of the selected date, programmatic or by the user
    DateChanged(NaiveDate),
    /// The user committed a day in the grid
    DateSelected(NaiveDate),
}

pub struct DatePickerController {
    bounds: Bounds,
    week_start: WeekStart,
    view: ViewMonth,
    selected: Option<NaiveDate>,
    placeholder: Option<String>,
    locale: LocaleTag,
    labels: CalendarLabels,
}

impl DatePickerController {
    /// The view starts on the selected date's month, or today's, clamped into
    /// the bounds' months.
    pub fn new(
        settings: &DatePickerSettings,
        locale: LocaleTag,
        labels: CalendarLabels,
        today: NaiveDate,
    ) -> Self {
        let bounds = settings.bounds();
        let view = bounds.clamp_month(ViewMonth::of(settings.selected_date.unwrap_or(today)));
        Self {
            bounds,
            week_start: settings.week_starts_on,
            view,
            selected: settings.selected_date,
            placeholder: settings.placeholder.clone(),
            locale,
            labels,
        }
    }

    /// Build a controller whose labels follow the language stored under
    /// `settings.locale_key`.
    pub fn from_store(
        settings: &DatePickerSettings,
        store: &dyn PreferenceStore,
        formatter: &dyn LabelFormatter,
        today: NaiveDate,
    ) -> Self {
        let (locale, labels) = LocaleService::new(store).labels(
            settings.locale_key.as_deref(),
            settings.week_starts_on,
            formatter,
        );
        log::debug!("Date picker using locale {}", locale);
        Self::new(settings, locale, labels, today)
    }

    pub fn view(&self) -> ViewMonth {
        self.view
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn locale(&self) -> LocaleTag {
        self.locale
    }

    pub fn labels(&self) -> &CalendarLabels {
        &self.labels
    }

    pub fn set_labels(&mut self, locale: LocaleTag, labels: CalendarLabels) {
        self.locale = locale;
        self.labels = labels;
    }

    /// Step back one month. Returns whether the view moved.
    pub fn previous_month(&mut self) -> bool {
        self.navigate(-1)
    }

    /// Step forward one month. Returns whether the view moved.
    pub fn next_month(&mut self) -> bool {
        self.navigate(1)
    }

    fn navigate(&mut self, delta: i32) -> bool {
        let next = navigation::navigate_month(self.view, delta, &self.bounds);
        let moved = next != self.view;
        self.view = next;
        moved
    }

    pub fn can_go_previous(&self) -> bool {
        navigation::can_navigate(self.view, -1, &self.bounds)
    }

    pub fn can_go_next(&self) -> bool {
        navigation::can_navigate(self.view, 1, &self.bounds)
    }

    pub fn set_year(&mut self, year: i32) {
        self.view = navigation::set_year(self.view, year, &self.bounds);
    }

    pub fn set_month(&mut self, month: u32) {
        self.view = navigation::set_month(self.view, month, &self.bounds);
    }

    /// User picks `day` from the grid, in the month at `offset` from the view.
    ///
    /// Returns the events to forward to the host; empty when the day is
    /// disabled or does not exist.
    pub fn select_day(&mut self, day: u32, offset: MonthOffset) -> Vec<PickerEvent> {
        let Some(target) = self.view.checked_shift(offset.delta()) else {
            return Vec::new();
        };
        let Some(selection) = navigation::select_day(day, target, self.view, &self.bounds) else {
            return Vec::new();
        };

        if let Some(view) = selection.view {
            self.view = view;
        }
        self.selected = Some(selection.date);
        log::debug!("Selected {}", selection.date);

        vec![
            PickerEvent::DateChanged(selection.date),
            PickerEvent::DateSelected(selection.date),
        ]
    }

    /// Host-driven change of the selection. Out-of-range dates are ignored.
    pub fn set_selected_date(&mut self, date: NaiveDate) -> Option<PickerEvent> {
        if self.bounds.is_disabled(date) {
            log::warn!("Ignoring selected date {} outside the selectable range", date);
            return None;
        }
        if self.selected == Some(date) {
            return None;
        }

        self.selected = Some(date);
        self.view = ViewMonth::of(date);
        Some(PickerEvent::DateChanged(date))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn grid(&self, today: NaiveDate) -> CalendarGrid {
        CalendarGrid::generate(self.view, &self.bounds, self.selected, self.week_start, today)
    }

    pub fn year_options(&self, today: NaiveDate) -> impl Iterator<Item = i32> {
        navigation::year_options(&self.bounds, today)
    }

    pub fn month_options(&self) -> Vec<MonthOption> {
        navigation::month_options(self.view, &self.bounds)
    }

    /// Text for the trigger: the selection, else the placeholder, else today.
    pub fn trigger_label(&self, today: NaiveDate) -> String {
        match (self.selected, &self.placeholder) {
            (Some(date), _) => format_display_date(date),
            (None, Some(placeholder)) => placeholder.clone(),
            (None, None) => format_display_date(today),
        }
    }
}
