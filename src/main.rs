// Rust Datepicker demo
// Main entry point

use rust_datepicker::models::settings::DatePickerSettings;
use rust_datepicker::services::config::{
    default_config_path, default_preferences_path, load_settings,
};
use rust_datepicker::services::preferences::{JsonPreferenceStore, PreferenceStore};
use rust_datepicker::ui_egui::{DemoApp, UI_LANGUAGE_KEY};
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Datepicker");

    let settings = load_startup_settings();
    let language_key = settings.locale_key.as_deref().unwrap_or(UI_LANGUAGE_KEY);
    let store = open_preferences(language_key);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rust Datepicker")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Datepicker",
        options,
        Box::new(move |cc| Ok(Box::new(DemoApp::new(cc, &settings, Box::new(store))))),
    )
}

fn load_startup_settings() -> DatePickerSettings {
    let Some(path) = default_config_path() else {
        log::warn!("No config directory available, using default settings");
        return DatePickerSettings::default();
    };

    match load_settings(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}. Using defaults.", e);
            DatePickerSettings::default()
        }
    }
}

fn open_preferences(language_key: &str) -> JsonPreferenceStore {
    let path = default_preferences_path().unwrap_or_else(|| PathBuf::from("preferences.json"));
    log::info!("Using preference file {}", path.display());
    let store = JsonPreferenceStore::new(path);

    // Seed the language the demo pickers read
    match store.get(language_key) {
        Ok(Some(_)) => {}
        Ok(None) => {
            if let Err(e) = store.set(language_key, "en") {
                log::warn!("Failed to seed language preference: {:#}", e);
            }
        }
        Err(e) => log::warn!("Failed to read language preference: {:#}", e),
    }

    store
}
