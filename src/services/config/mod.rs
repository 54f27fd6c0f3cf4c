// Configuration file handling
// Loads and saves DatePickerSettings as TOML under the platform config dir

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::DatePickerSettings;

const CONFIG_FILE: &str = "datepicker.toml";
const PREFERENCES_FILE: &str = "preferences.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "KenBoyle", "RustDatepicker")
}

/// Default location of the settings file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Default location of the JSON preference store.
pub fn default_preferences_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join(PREFERENCES_FILE))
}

/// Load settings from `path`. A missing file yields the defaults; an
/// unreadable, malformed or invalid one is an error.
pub fn load_settings(path: &Path) -> Result<DatePickerSettings> {
    if !path.exists() {
        log::info!(
            "No settings file at {}, using defaults",
            path.display()
        );
        return Ok(DatePickerSettings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings: DatePickerSettings = toml::from_str(&content)
        .with_context(|| format!("failed to parse settings from {}", path.display()))?;
    settings
        .validate()
        .with_context(|| format!("invalid settings in {}", path.display()))?;

    log::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &DatePickerSettings) -> Result<()> {
    settings.validate().context("refusing to save invalid settings")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(path, content)
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    Ok(())
}
