// Integration tests for configuration, preference persistence and the
// controller working against real stores
mod fixtures;

use fixtures::{bounds, dates, months};
use pretty_assertions::assert_eq;
use rust_datepicker::models::calendar::{MonthOffset, ViewMonth, WeekStart};
use rust_datepicker::models::settings::DatePickerSettings;
use rust_datepicker::services::config::{load_settings, save_settings};
use rust_datepicker::services::database::Database;
use rust_datepicker::services::locale::{ChronoLabelFormatter, LocaleService, LocaleTag};
use rust_datepicker::services::navigation;
use rust_datepicker::services::picker::{DatePickerController, PickerEvent};
use rust_datepicker::services::preferences::{
    JsonPreferenceStore, PreferenceStore, SqlitePreferenceStore,
};

#[test]
fn test_settings_round_trip_through_toml_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config").join("datepicker.toml");

    // Missing file gives defaults
    let defaults = load_settings(&path).expect("Failed to load defaults");
    assert_eq!(defaults, DatePickerSettings::default());

    let settings = DatePickerSettings {
        max_date: Some(dates::new_years_eve_2024()),
        selected_date: Some(dates::leap_day_2024()),
        placeholder: Some("Pick a date".to_string()),
        dark_mode: Some(true),
        locale_key: Some("key_ui_language".to_string()),
        week_starts_on: WeekStart::Sunday,
        ..Default::default()
    };
    save_settings(&path, &settings).expect("Failed to save settings");

    let loaded = load_settings(&path).expect("Failed to load settings");
    assert_eq!(loaded, settings);
}

#[test]
fn test_invalid_settings_file_is_rejected() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("datepicker.toml");
    std::fs::write(&path, "min_date = \"2025-01-01\"\nmax_date = \"2024-01-01\"\n")
        .expect("Failed to write config");

    let err = load_settings(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("invalid settings"));
}

#[test]
fn test_json_preferences_survive_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("preferences.json");

    JsonPreferenceStore::new(&path)
        .set("key_ui_language", "fr")
        .expect("Failed to write preference");

    let reopened = JsonPreferenceStore::new(&path);
    let tag = LocaleService::new(&reopened).resolve(Some("key_ui_language"));
    assert_eq!(tag, LocaleTag::FrFr);
}

#[test]
fn test_sqlite_preferences_drive_controller_labels() {
    let db = Database::new(":memory:").expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    let store = SqlitePreferenceStore::new(&db);
    store.set("lang", "de").expect("Failed to store language");

    let settings = DatePickerSettings {
        locale_key: Some("lang".to_string()),
        ..Default::default()
    };
    let controller = DatePickerController::from_store(
        &settings,
        &store,
        &ChronoLabelFormatter,
        dates::valentine_2025(),
    );

    assert_eq!(controller.locale(), LocaleTag::DeDe);
    assert_eq!(controller.labels().month_name(1), "Januar");
}

#[test]
fn test_controller_session_within_bounds() {
    let settings = DatePickerSettings {
        min_date: Some(dates::ymd(2024, 1, 30)),
        max_date: Some(dates::ymd(2024, 3, 1)),
        ..Default::default()
    };
    let store = JsonPreferenceStore::new("does/not/exist.json");
    let today = dates::leap_day_2024();
    let mut controller =
        DatePickerController::from_store(&settings, &store, &ChronoLabelFormatter, today);

    assert_eq!(controller.view(), months::feb_2024());
    assert_eq!(controller.bounds(), &bounds::around_feb_2024());

    // Leading Jan 29 is before the minimum, Jan 30 is not
    let grid = controller.grid(today);
    let jan_29 = grid.cell_for(dates::ymd(2024, 1, 29)).expect("cell present");
    assert!(jan_29.is_disabled);
    assert!(!grid.cells[1].is_disabled);
    assert!(controller.select_day(29, MonthOffset::Previous).is_empty());

    // Trailing March 1st is the last selectable day and moves the view
    let events = controller.select_day(1, MonthOffset::Next);
    assert_eq!(
        events,
        vec![
            PickerEvent::DateChanged(dates::ymd(2024, 3, 1)),
            PickerEvent::DateSelected(dates::ymd(2024, 3, 1)),
        ]
    );
    assert_eq!(controller.view(), ViewMonth::new(2024, 3).unwrap());
    assert!(!controller.next_month());
    assert_eq!(controller.trigger_label(today), "2024-03-01");
}

#[test]
fn test_year_selector_range_with_default_minimum() {
    let options: Vec<i32> =
        navigation::year_options(&bounds::since_epoch(), dates::valentine_2025()).collect();
    assert_eq!(options.first(), Some(&1970));
    assert_eq!(options.last(), Some(&2035));
}
