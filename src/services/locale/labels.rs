use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use super::LocaleTag;
use crate::models::calendar::{WeekStart, DAYS_PER_WEEK};

/// Localized names shown in the picker header and weekday row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLabels {
    /// Long month names, January first
    pub month_names: [String; 12],
    /// Short weekday names in grid column order
    pub weekday_names: [String; DAYS_PER_WEEK],
}

impl CalendarLabels {
    /// Name for a 1-based month.
    pub fn month_name(&self, month: u32) -> &str {
        month
            .checked_sub(1)
            .and_then(|index| self.month_names.get(index as usize))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Produces month/weekday labels for a locale. Calendar conventions differ per
/// locale, so implementations are free to delegate to any i18n backend.
pub trait LabelFormatter {
    fn labels(&self, locale: LocaleTag, week_start: WeekStart) -> CalendarLabels;
}

/// Formatter backed by chrono's bundled locale data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoLabelFormatter;

impl ChronoLabelFormatter {
    fn format(date: Option<NaiveDate>, pattern: &str, locale: chrono::Locale) -> String {
        date.map(|date| {
            Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
                .format_localized(pattern, locale)
                .to_string()
        })
        .unwrap_or_default()
    }
}

impl LabelFormatter for ChronoLabelFormatter {
    fn labels(&self, locale: LocaleTag, week_start: WeekStart) -> CalendarLabels {
        let chrono_locale = locale.chrono_locale();

        let month_names = std::array::from_fn(|index| {
            Self::format(
                NaiveDate::from_ymd_opt(2024, index as u32 + 1, 1),
                "%B",
                chrono_locale,
            )
        });

        // January 2024 starts on a Monday, so day N+1 is weekday N from Monday
        let weekdays = week_start.weekdays();
        let weekday_names = std::array::from_fn(|column| {
            let day = weekdays[column].num_days_from_monday() + 1;
            Self::format(NaiveDate::from_ymd_opt(2024, 1, day), "%a", chrono_locale)
        });

        CalendarLabels {
            month_names,
            weekday_names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_english_monday_start() {
        let labels = ChronoLabelFormatter.labels(LocaleTag::EnUs, WeekStart::Monday);
        assert_eq!(labels.month_names[0], "January");
        assert_eq!(labels.month_names[11], "December");
        assert_eq!(
            labels.weekday_names.to_vec(),
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
    }

    #[test]
    fn test_english_sunday_start() {
        let labels = ChronoLabelFormatter.labels(LocaleTag::EnUs, WeekStart::Sunday);
        assert_eq!(labels.weekday_names[0], "Sun");
        assert_eq!(labels.weekday_names[6], "Sat");
    }

    #[test]
    fn test_localized_month_names_differ() {
        let english = ChronoLabelFormatter.labels(LocaleTag::EnUs, WeekStart::Monday);
        let german = ChronoLabelFormatter.labels(LocaleTag::DeDe, WeekStart::Monday);
        assert_eq!(german.month_names[0], "Januar");
        assert_ne!(english.weekday_names, german.weekday_names);
    }

    #[test]
    fn test_every_locale_has_labels() {
        for locale in LocaleTag::ALL {
            let labels = ChronoLabelFormatter.labels(locale, WeekStart::Monday);
            assert!(labels.month_names.iter().all(|name| !name.is_empty()), "{}", locale);
            assert!(labels.weekday_names.iter().all(|name| !name.is_empty()), "{}", locale);
        }
    }

    #[test]
    fn test_month_name_lookup() {
        let labels = ChronoLabelFormatter.labels(LocaleTag::EnUs, WeekStart::Monday);
        assert_eq!(labels.month_name(2), "February");
        assert_eq!(labels.month_name(0), "");
        assert_eq!(labels.month_name(13), "");
    }
}
