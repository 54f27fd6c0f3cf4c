//! Locale resolution for month and weekday labels.
//!
//! The host stores a short language code (e.g. `"fr"`) under a key of its
//! choosing. [`LocaleService`] reads that key from an explicit
//! [`PreferenceStore`] and maps the code onto one of the supported locale
//! tags, falling back to `en-US` whenever anything is missing or fails.

mod labels;

pub use labels::{CalendarLabels, ChronoLabelFormatter, LabelFormatter};

use std::fmt;

use crate::models::calendar::WeekStart;
use crate::services::preferences::PreferenceStore;

/// Full locale tags the picker knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocaleTag {
    #[default]
    EnUs,
    ZhCn,
    MsMy,
    JaJp,
    KoKr,
    FrFr,
    DeDe,
    EsEs,
    PtBr,
    RuRu,
    ArSa,
    HiIn,
}

impl LocaleTag {
    pub const ALL: [LocaleTag; 12] = [
        LocaleTag::EnUs,
        LocaleTag::ZhCn,
        LocaleTag::MsMy,
        LocaleTag::JaJp,
        LocaleTag::KoKr,
        LocaleTag::FrFr,
        LocaleTag::DeDe,
        LocaleTag::EsEs,
        LocaleTag::PtBr,
        LocaleTag::RuRu,
        LocaleTag::ArSa,
        LocaleTag::HiIn,
    ];

    /// Two-letter language code that maps to this tag.
    pub fn code(self) -> &'static str {
        match self {
            LocaleTag::EnUs => "en",
            LocaleTag::ZhCn => "zh",
            LocaleTag::MsMy => "ms",
            LocaleTag::JaJp => "ja",
            LocaleTag::KoKr => "ko",
            LocaleTag::FrFr => "fr",
            LocaleTag::DeDe => "de",
            LocaleTag::EsEs => "es",
            LocaleTag::PtBr => "pt",
            LocaleTag::RuRu => "ru",
            LocaleTag::ArSa => "ar",
            LocaleTag::HiIn => "hi",
        }
    }

    /// BCP 47 form, e.g. `"pt-BR"`.
    pub fn tag(self) -> &'static str {
        match self {
            LocaleTag::EnUs => "en-US",
            LocaleTag::ZhCn => "zh-CN",
            LocaleTag::MsMy => "ms-MY",
            LocaleTag::JaJp => "ja-JP",
            LocaleTag::KoKr => "ko-KR",
            LocaleTag::FrFr => "fr-FR",
            LocaleTag::DeDe => "de-DE",
            LocaleTag::EsEs => "es-ES",
            LocaleTag::PtBr => "pt-BR",
            LocaleTag::RuRu => "ru-RU",
            LocaleTag::ArSa => "ar-SA",
            LocaleTag::HiIn => "hi-IN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Accepts either a two-letter code or one of the supported full tags.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::from_code(raw).or_else(|| {
            Self::ALL
                .into_iter()
                .find(|locale| locale.tag().eq_ignore_ascii_case(raw))
        })
    }

    /// Map a stored value onto a tag, defaulting to `en-US`.
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    pub(crate) fn chrono_locale(self) -> chrono::Locale {
        match self {
            LocaleTag::EnUs => chrono::Locale::en_US,
            LocaleTag::ZhCn => chrono::Locale::zh_CN,
            LocaleTag::MsMy => chrono::Locale::ms_MY,
            LocaleTag::JaJp => chrono::Locale::ja_JP,
            LocaleTag::KoKr => chrono::Locale::ko_KR,
            LocaleTag::FrFr => chrono::Locale::fr_FR,
            LocaleTag::DeDe => chrono::Locale::de_DE,
            LocaleTag::EsEs => chrono::Locale::es_ES,
            LocaleTag::PtBr => chrono::Locale::pt_BR,
            LocaleTag::RuRu => chrono::Locale::ru_RU,
            LocaleTag::ArSa => chrono::Locale::ar_SA,
            LocaleTag::HiIn => chrono::Locale::hi_IN,
        }
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Reads the language preference from a store and produces labels for it.
pub struct LocaleService<'a> {
    store: &'a dyn PreferenceStore,
}

impl<'a> LocaleService<'a> {
    pub fn new(store: &'a dyn PreferenceStore) -> Self {
        Self { store }
    }

    /// Resolve the locale stored under `key`. Never fails: a missing key, a
    /// missing or unknown value, and store errors all yield `en-US`.
    pub fn resolve(&self, key: Option<&str>) -> LocaleTag {
        let Some(key) = key else {
            return LocaleTag::default();
        };

        match self.store.get(key) {
            Ok(Some(code)) => LocaleTag::parse(&code).unwrap_or_else(|| {
                log::debug!("Unsupported language code '{}', using en-US", code);
                LocaleTag::default()
            }),
            Ok(None) => LocaleTag::default(),
            Err(err) => {
                log::warn!("Failed to get language code from '{}': {:#}", key, err);
                LocaleTag::default()
            }
        }
    }

    /// Month and weekday labels for the locale stored under `key`.
    pub fn labels(
        &self,
        key: Option<&str>,
        week_start: WeekStart,
        formatter: &dyn LabelFormatter,
    ) -> (LocaleTag, CalendarLabels) {
        let locale = self.resolve(key);
        (locale, formatter.labels(locale, week_start))
    }
}
