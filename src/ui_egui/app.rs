use crate::models::settings::DatePickerSettings;
use crate::services::locale::{ChronoLabelFormatter, LocaleService, LocaleTag};
use crate::services::picker::PickerEvent;
use crate::services::preferences::PreferenceStore;
use crate::ui_egui::date_picker::DatePicker;
use crate::ui_egui::theme::PickerTheme;
use chrono::NaiveDate;
use egui::{Align2, RichText};

/// Default preference key edited by the language selector
pub const UI_LANGUAGE_KEY: &str = "key_ui_language";

const EDGE_MARGIN: f32 = 10.0;

struct PickerSlot {
    picker: DatePicker,
    locale_key: String,
    anchor: Align2,
    offset: egui::Vec2,
}

/// Demo window with three pickers sharing one selected date.
///
/// The pickers sit at the top-left, top-right and bottom-right corners so the
/// dropdown can be seen flipping above and right-aligning.
pub struct DemoApp {
    store: Box<dyn PreferenceStore>,
    slots: Vec<PickerSlot>,
    selected: Option<NaiveDate>,
    /// Preference key read by the primary picker and written by the selector
    language_key: String,
    language: LocaleTag,
    disabled: bool,
}

impl DemoApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: &DatePickerSettings,
        store: Box<dyn PreferenceStore>,
    ) -> Self {
        let visuals = if PickerTheme::resolve(None).is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        cc.egui_ctx.set_visuals(visuals);

        Self::with_store(settings, store)
    }

    fn with_store(settings: &DatePickerSettings, store: Box<dyn PreferenceStore>) -> Self {
        let primary_key = settings
            .locale_key
            .clone()
            .unwrap_or_else(|| UI_LANGUAGE_KEY.to_string());

        let layout = [
            (
                "picker_main",
                primary_key.clone(),
                settings.dark_mode.or(Some(true)),
                Align2::LEFT_TOP,
                egui::vec2(EDGE_MARGIN, EDGE_MARGIN),
            ),
            (
                "picker_right",
                "another_language_code".to_string(),
                Some(false),
                Align2::RIGHT_TOP,
                egui::vec2(-EDGE_MARGIN, EDGE_MARGIN),
            ),
            (
                "picker_bottom",
                "another_language_code2".to_string(),
                Some(false),
                Align2::RIGHT_BOTTOM,
                egui::vec2(-EDGE_MARGIN, -60.0),
            ),
        ];

        let slots = layout
            .into_iter()
            .map(|(name, locale_key, dark_mode, anchor, offset)| {
                let picker_settings = DatePickerSettings {
                    locale_key: Some(locale_key.clone()),
                    dark_mode,
                    ..settings.clone()
                };
                let picker = DatePicker::from_settings(name, &picker_settings, store.as_ref())
                    .on_date_selected(move |date| {
                        log::info!("Date selected from {}: {}", name, date)
                    });
                PickerSlot {
                    picker,
                    locale_key,
                    anchor,
                    offset,
                }
            })
            .collect();

        let language = LocaleService::new(store.as_ref()).resolve(Some(primary_key.as_str()));

        Self {
            store,
            slots,
            selected: settings.selected_date,
            language_key: primary_key,
            language,
            disabled: settings.disabled,
        }
    }

    fn set_language(&mut self, language: LocaleTag) {
        if let Err(e) = self.store.set(&self.language_key, language.code()) {
            log::warn!("Failed to store language {}: {:#}", language, e);
            return;
        }
        self.language = language;

        let service = LocaleService::new(self.store.as_ref());
        for slot in &mut self.slots {
            let week_start = slot.picker.controller().week_start();
            let (locale, labels) =
                service.labels(Some(slot.locale_key.as_str()), week_start, &ChronoLabelFormatter);
            slot.picker.controller_mut().set_labels(locale, labels);
        }
        log::info!("UI language set to {}", language);
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        for slot in &mut self.slots {
            slot.picker.set_disabled(disabled);
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        for slot in &mut self.slots {
            slot.picker.controller_mut().clear_selection();
        }
    }

    /// Push a date changed in one picker into the others.
    fn share_date(&mut self, source: usize, date: NaiveDate) {
        self.selected = Some(date);
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if index != source {
                slot.picker.set_selected_date(date);
            }
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Language:");
            let mut language = self.language;
            egui::ComboBox::from_id_source("demo_language")
                .selected_text(language.tag())
                .show_ui(ui, |ui| {
                    for tag in LocaleTag::ALL {
                        ui.selectable_value(&mut language, tag, tag.tag());
                    }
                });
            if language != self.language {
                self.set_language(language);
            }

            ui.separator();

            let mut disabled = self.disabled;
            if ui.checkbox(&mut disabled, "Disabled").changed() {
                self.set_disabled(disabled);
            }

            if ui.button("Clear").clicked() {
                self.clear_selection();
            }

            ui.separator();

            let text = match self.selected {
                Some(date) => format!("Selected: {}", date.format("%A, %d %B %Y")),
                None => "No date selected".to_string(),
            };
            ui.label(RichText::new(text).strong());
        });
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("demo_controls").show(ctx, |ui| {
            self.render_controls(ui);
        });

        egui::CentralPanel::default().show(ctx, |_ui| {});

        let mut changed = None;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let picker = &mut slot.picker;
            egui::Area::new(egui::Id::new("demo_slot").with(index))
                .anchor(slot.anchor, slot.offset)
                .show(ctx, |ui| {
                    let response = picker.show(ui);
                    for event in &response.events {
                        if let PickerEvent::DateChanged(date) = event {
                            changed = Some((index, *date));
                        }
                    }
                });
        }

        if let Some((index, date)) = changed {
            self.share_date(index, date);
        }
    }
}
