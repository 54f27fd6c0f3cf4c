//! Theme module for the egui date picker
//!
//! Defines the PickerTheme palette used by the trigger button and dropdown,
//! with light and dark presets and optional system theme detection.

use egui::Color32;

/// All colors used by the date picker
#[derive(Debug, Clone, PartialEq)]
pub struct PickerTheme {
    /// Whether this is a dark theme
    pub is_dark: bool,

    /// Trigger button fill and border
    pub trigger_background: Color32,
    pub trigger_border: Color32,
    pub trigger_border_hover: Color32,
    pub trigger_text: Color32,
    pub icon: Color32,

    /// Dropdown panel (header, selectors, pointer)
    pub dropdown_background: Color32,
    pub dropdown_border: Color32,
    pub nav_text: Color32,
    pub selector_text: Color32,

    /// Weekday row and separator under it
    pub weekday_text: Color32,
    pub weekday_separator: Color32,

    /// Day grid
    pub calendar_background: Color32,
    pub day_text: Color32,
    pub day_hover_background: Color32,
    pub selected_background: Color32,
    pub selected_text: Color32,
    pub today_border: Color32,
    pub disabled_text: Color32,
}

impl PickerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            trigger_background: Color32::WHITE,
            trigger_border: Color32::from_rgb(209, 213, 219),
            trigger_border_hover: Color32::from_rgb(156, 163, 175),
            trigger_text: Color32::from_rgb(108, 108, 108),
            icon: Color32::from_rgb(108, 108, 108),
            dropdown_background: Color32::from_rgb(240, 240, 240),
            dropdown_border: Color32::from_rgb(209, 213, 219),
            nav_text: Color32::BLACK,
            selector_text: Color32::BLACK,
            weekday_text: Color32::BLACK,
            weekday_separator: Color32::from_rgb(174, 174, 174),
            calendar_background: Color32::WHITE,
            day_text: Color32::BLACK,
            day_hover_background: Color32::from_rgb(243, 244, 246),
            selected_background: Color32::from_rgb(59, 130, 246),
            selected_text: Color32::WHITE,
            today_border: Color32::from_rgb(59, 130, 246),
            disabled_text: Color32::from_rgb(209, 213, 219),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            trigger_background: Color32::from_rgb(70, 70, 70),
            trigger_border: Color32::TRANSPARENT,
            trigger_text: Color32::from_rgb(165, 165, 165),
            icon: Color32::WHITE,
            dropdown_background: Color32::from_rgb(70, 70, 70),
            dropdown_border: Color32::from_rgb(55, 65, 81),
            nav_text: Color32::WHITE,
            selector_text: Color32::WHITE,
            weekday_text: Color32::from_rgb(209, 213, 219),
            calendar_background: Color32::from_rgb(70, 70, 70),
            day_text: Color32::WHITE,
            day_hover_background: Color32::from_rgb(107, 114, 128),
            disabled_text: Color32::from_rgb(75, 85, 99),
            ..Self::light()
        }
    }

    /// Pick a preset from an explicit flag, or from the system theme when the
    /// flag is unset.
    pub fn resolve(dark_mode: Option<bool>) -> Self {
        let is_dark = dark_mode.unwrap_or_else(|| match dark_light::detect() {
            dark_light::Mode::Dark => true,
            dark_light::Mode::Light | dark_light::Mode::Default => false,
        });

        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for PickerTheme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert!(!PickerTheme::light().is_dark);
        assert!(PickerTheme::dark().is_dark);
        assert_ne!(
            PickerTheme::light().calendar_background,
            PickerTheme::dark().calendar_background
        );
    }

    #[test]
    fn test_dark_keeps_selection_colors() {
        let dark = PickerTheme::dark();
        let light = PickerTheme::light();
        assert_eq!(dark.selected_background, light.selected_background);
        assert_eq!(dark.today_border, light.today_border);
    }

    #[test]
    fn test_explicit_flag_wins() {
        assert!(PickerTheme::resolve(Some(true)).is_dark);
        assert!(!PickerTheme::resolve(Some(false)).is_dark);
    }
}
