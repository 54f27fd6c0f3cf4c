//! Date picker configuration surface.
//!
//! Every field is optional in the TOML form; omitted fields take the defaults
//! below.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::calendar::{Bounds, WeekStart};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("min date {min} is after max date {max}")]
    InvertedBounds { min: NaiveDate, max: NaiveDate },
    #[error("selected date {0} lies outside the selectable range")]
    SelectedOutOfRange(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePickerSettings {
    /// Earliest selectable date (defaults to the Unix epoch)
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    /// Initially selected date
    pub selected_date: Option<NaiveDate>,
    /// Trigger text when nothing is selected
    pub placeholder: Option<String>,
    /// `None` follows the system theme
    pub dark_mode: Option<bool>,
    /// Preference-store key holding the UI language code
    pub locale_key: Option<String>,
    pub week_starts_on: WeekStart,
    pub disabled: bool,
}

impl Default for DatePickerSettings {
    fn default() -> Self {
        Self {
            min_date: Some(NaiveDate::default()),
            max_date: None,
            selected_date: None,
            placeholder: None,
            dark_mode: None,
            locale_key: None,
            week_starts_on: WeekStart::default(),
            disabled: false,
        }
    }
}

impl DatePickerSettings {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min_date, self.max_date)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                return Err(SettingsError::InvertedBounds { min, max });
            }
        }

        if let Some(selected) = self.selected_date {
            if self.bounds().is_disabled(selected) {
                return Err(SettingsError::SelectedOutOfRange(selected));
            }
        }

        Ok(())
    }
}
