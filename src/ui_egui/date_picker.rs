//! Date picker widget.
//!
//! A trigger button showing a calendar icon (and the current date on wide
//! viewports) that opens a dropdown with month navigation, year/month
//! selectors, a localized weekday row and the 6×7 day grid. All state changes
//! go through [`DatePickerController`]; this module only draws and routes
//! input.

use chrono::{Local, NaiveDate};
use egui::{
    Align2, CursorIcon, FontId, Margin, Pos2, Rect, RichText, Rounding, Sense, Shape, Stroke, Vec2,
};
use std::hash::Hash;

use super::icon::calendar_icon;
use super::placement::{is_wide_screen, DropdownPlacement, DROPDOWN_WIDTH};
use super::theme::PickerTheme;
use crate::models::calendar::{GridCell, DAYS_PER_WEEK};
use crate::models::settings::DatePickerSettings;
use crate::services::locale::ChronoLabelFormatter;
use crate::services::picker::{DatePickerController, PickerEvent};
use crate::services::preferences::PreferenceStore;

const DAY_CELL_HEIGHT: f32 = 27.2;
const DAY_FONT_SIZE: f32 = 12.8;
const DAY_SPACING: f32 = 2.0;
const CALENDAR_PADDING: f32 = 8.0;
const HEADER_HEIGHT: f32 = 33.0;
const NAV_BUTTON_SIZE: f32 = 32.0;
const POINTER_HALF_DIAGONAL: f32 = 8.5;

type DateHook = Box<dyn FnMut(NaiveDate)>;

/// Result of showing the picker for one frame
pub struct DatePickerResponse {
    /// Response of the trigger button
    pub response: egui::Response,
    /// Events emitted this frame, in order
    pub events: Vec<PickerEvent>,
}

impl DatePickerResponse {
    /// Date committed by the user this frame, if any
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.events.iter().find_map(|event| match event {
            PickerEvent::DateSelected(date) => Some(*date),
            PickerEvent::DateChanged(_) => None,
        })
    }
}

pub struct DatePicker {
    id: egui::Id,
    controller: DatePickerController,
    theme: PickerTheme,
    disabled: bool,
    is_open: bool,
    on_date_change: Option<DateHook>,
    on_date_selected: Option<DateHook>,
}

impl DatePicker {
    pub fn new(id_source: impl Hash, controller: DatePickerController, theme: PickerTheme) -> Self {
        Self {
            id: egui::Id::new(id_source),
            controller,
            theme,
            disabled: false,
            is_open: false,
            on_date_change: None,
            on_date_selected: None,
        }
    }

    /// Build a picker from its configuration, reading the language preference
    /// from `store`.
    pub fn from_settings(
        id_source: impl Hash,
        settings: &DatePickerSettings,
        store: &dyn PreferenceStore,
    ) -> Self {
        let today = Local::now().date_naive();
        let controller =
            DatePickerController::from_store(settings, store, &ChronoLabelFormatter, today);
        let mut picker = Self::new(id_source, controller, PickerTheme::resolve(settings.dark_mode));
        picker.disabled = settings.disabled;
        picker
    }

    /// Called on every selection or programmatic change
    pub fn on_date_change(mut self, hook: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_date_change = Some(Box::new(hook));
        self
    }

    /// Called only when the user picks a day
    pub fn on_date_selected(mut self, hook: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_date_selected = Some(Box::new(hook));
        self
    }

    pub fn controller(&self) -> &DatePickerController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DatePickerController {
        &mut self.controller
    }

    pub fn theme(&self) -> &PickerTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: PickerTheme) {
        self.theme = theme;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.is_open = false;
        }
    }

    /// Programmatic change of the selected date; fires `on_date_change`.
    pub fn set_selected_date(&mut self, date: NaiveDate) -> bool {
        match self.controller.set_selected_date(date) {
            Some(event) => {
                self.dispatch(&[event]);
                true
            }
            None => false,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> DatePickerResponse {
        let today = Local::now().date_naive();
        let viewport = ui.ctx().screen_rect();
        let response = self.show_trigger(ui, today, is_wide_screen(viewport.width()));

        if response.clicked() && !self.disabled {
            self.is_open = !self.is_open;
        }

        let mut events = Vec::new();
        if self.is_open {
            let trigger_rect = response.rect;
            let placement = DropdownPlacement::compute(trigger_rect, viewport);
            let dropdown = egui::Area::new(self.id.with("dropdown"))
                .order(egui::Order::Foreground)
                .pivot(placement.pivot())
                .fixed_pos(placement.anchor(trigger_rect))
                .show(ui.ctx(), |ui| {
                    self.show_dropdown(ui, today, placement, trigger_rect, &mut events)
                });

            let clicked_outside = ui.input(|input| {
                input.pointer.any_pressed()
                    && input.pointer.interact_pos().is_some_and(|pos| {
                        !dropdown.response.rect.contains(pos) && !trigger_rect.contains(pos)
                    })
            });
            // Combo box lists live outside the dropdown rect
            if clicked_outside && !ui.memory(|mem| mem.any_popup_open()) {
                self.is_open = false;
            }

            if events
                .iter()
                .any(|event| matches!(event, PickerEvent::DateSelected(_)))
            {
                self.is_open = false;
            }
        }

        self.dispatch(&events);
        DatePickerResponse { response, events }
    }

    fn dispatch(&mut self, events: &[PickerEvent]) {
        for event in events {
            match *event {
                PickerEvent::DateChanged(date) => {
                    if let Some(hook) = self.on_date_change.as_mut() {
                        hook(date);
                    }
                }
                PickerEvent::DateSelected(date) => {
                    if let Some(hook) = self.on_date_selected.as_mut() {
                        hook(date);
                    }
                }
            }
        }
    }

    fn show_trigger(&self, ui: &mut egui::Ui, today: NaiveDate, show_text: bool) -> egui::Response {
        let theme = &self.theme;
        let rounding = Rounding::same(6.0);
        let (icon_color, text_color) = if self.disabled {
            (theme.disabled_text, theme.disabled_text)
        } else {
            (theme.icon, theme.trigger_text)
        };

        let frame = egui::Frame::none()
            .fill(theme.trigger_background)
            .rounding(rounding)
            .stroke(Stroke::new(1.0, theme.trigger_border))
            .inner_margin(Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 8.0;
                    calendar_icon(ui, icon_color);
                    if show_text {
                        ui.label(
                            RichText::new(self.controller.trigger_label(today)).color(text_color),
                        );
                    }
                });
            });

        let rect = frame.response.rect;
        if self.disabled {
            return ui
                .interact(rect, self.id.with("trigger"), Sense::hover())
                .on_hover_cursor(CursorIcon::NotAllowed);
        }

        let response = ui.interact(rect, self.id.with("trigger"), Sense::click());
        if response.hovered() {
            ui.painter()
                .rect_stroke(rect, rounding, Stroke::new(1.0, theme.trigger_border_hover));
        }
        response.on_hover_cursor(CursorIcon::PointingHand)
    }

    fn show_dropdown(
        &mut self,
        ui: &mut egui::Ui,
        today: NaiveDate,
        placement: DropdownPlacement,
        trigger_rect: Rect,
        events: &mut Vec<PickerEvent>,
    ) {
        let theme = self.theme.clone();

        let frame = egui::Frame::none()
            .fill(theme.dropdown_background)
            .stroke(Stroke::new(1.0, theme.dropdown_border))
            .rounding(Rounding::same(8.0))
            .inner_margin(Margin {
                top: 8.0,
                ..Margin::ZERO
            })
            .show(ui, |ui| {
                ui.set_width(DROPDOWN_WIDTH);
                ui.spacing_mut().item_spacing.y = 0.0;
                self.show_header(ui, today, &theme);
                self.show_weekdays(ui, &theme);
                self.show_days(ui, today, &theme, events);
            });

        paint_pointer(
            ui.painter(),
            &theme,
            placement,
            placement.pointer_x(trigger_rect),
            frame.response.rect,
        );
    }

    fn show_header(&mut self, ui: &mut egui::Ui, today: NaiveDate, theme: &PickerTheme) {
        let view = self.controller.view();

        ui.horizontal(|ui| {
            ui.set_height(HEADER_HEIGHT);

            let previous = nav_button(ui, "◀", theme.nav_text, self.controller.can_go_previous())
                .on_hover_text("Previous month");
            if previous.clicked() {
                self.controller.previous_month();
            }

            let mut year = view.year();
            egui::ComboBox::from_id_source(self.id.with("year"))
                .width(64.0)
                .selected_text(RichText::new(year.to_string()).color(theme.selector_text))
                .show_ui(ui, |ui| {
                    for option in self.controller.year_options(today) {
                        ui.selectable_value(&mut year, option, option.to_string());
                    }
                });
            if year != view.year() {
                self.controller.set_year(year);
            }

            let labels = self.controller.labels().clone();
            let options = self.controller.month_options();
            let mut month = view.month();
            egui::ComboBox::from_id_source(self.id.with("month"))
                .width(96.0)
                .selected_text(RichText::new(labels.month_name(month)).color(theme.selector_text))
                .show_ui(ui, |ui| {
                    for option in &options {
                        ui.add_enabled_ui(!option.is_disabled, |ui| {
                            ui.selectable_value(
                                &mut month,
                                option.month,
                                labels.month_name(option.month),
                            );
                        });
                    }
                });
            if month != view.month() {
                self.controller.set_month(month);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let next = nav_button(ui, "▶", theme.nav_text, self.controller.can_go_next())
                    .on_hover_text("Next month");
                if next.clicked() {
                    self.controller.next_month();
                }
            });
        });
    }

    fn show_weekdays(&self, ui: &mut egui::Ui, theme: &PickerTheme) {
        let column_width = DROPDOWN_WIDTH / DAYS_PER_WEEK as f32;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for name in &self.controller.labels().weekday_names {
                ui.add_sized(
                    [column_width, DAY_CELL_HEIGHT],
                    egui::Label::new(
                        RichText::new(name.as_str())
                            .size(12.0)
                            .strong()
                            .color(theme.weekday_text),
                    ),
                );
            }
        });

        let (rect, _) = ui.allocate_exact_size(Vec2::new(DROPDOWN_WIDTH, 1.0), Sense::hover());
        ui.painter().line_segment(
            [rect.left_center(), rect.right_center()],
            Stroke::new(1.0, theme.weekday_separator),
        );
    }

    fn show_days(
        &mut self,
        ui: &mut egui::Ui,
        today: NaiveDate,
        theme: &PickerTheme,
        events: &mut Vec<PickerEvent>,
    ) {
        let grid = self.controller.grid(today);
        let cell_width = (DROPDOWN_WIDTH
            - 2.0 * CALENDAR_PADDING
            - DAY_SPACING * (DAYS_PER_WEEK as f32 - 1.0))
            / DAYS_PER_WEEK as f32;

        egui::Frame::none()
            .fill(theme.calendar_background)
            .inner_margin(Margin::same(CALENDAR_PADDING))
            .rounding(Rounding {
                nw: 0.0,
                ne: 0.0,
                sw: 8.0,
                se: 8.0,
            })
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing = Vec2::splat(DAY_SPACING);
                for row in grid.rows() {
                    ui.horizontal(|ui| {
                        for cell in row {
                            if day_cell(ui, cell, cell_width, theme).clicked() {
                                events.extend(self.controller.select_day(cell.day, cell.offset));
                            }
                        }
                    });
                }
            });
    }
}

fn nav_button(ui: &mut egui::Ui, label: &str, color: egui::Color32, enabled: bool) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::Button::new(RichText::new(label).color(color))
            .frame(false)
            .min_size(Vec2::splat(NAV_BUTTON_SIZE)),
    )
}

fn day_cell(ui: &mut egui::Ui, cell: &GridCell, width: f32, theme: &PickerTheme) -> egui::Response {
    let sense = if cell.is_disabled {
        Sense::hover()
    } else {
        Sense::click()
    };
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, DAY_CELL_HEIGHT), sense);
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter();
    let rounding = Rounding::same(4.0);
    let mut text_color = theme.day_text;

    if cell.is_selected {
        painter.rect_filled(rect, rounding, theme.selected_background);
        text_color = theme.selected_text;
    } else if response.hovered() && !cell.is_disabled {
        painter.rect_filled(rect, rounding, theme.day_hover_background);
    }
    if cell.is_today {
        painter.rect_stroke(rect.shrink(1.0), rounding, Stroke::new(2.0, theme.today_border));
    }
    if cell.is_disabled {
        text_color = theme.disabled_text;
    }
    if !cell.is_current_month() {
        text_color = text_color.gamma_multiply(0.5);
    }

    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        cell.day.to_string(),
        FontId::proportional(DAY_FONT_SIZE),
        text_color,
    );

    if cell.is_disabled {
        response.on_hover_cursor(CursorIcon::NotAllowed)
    } else {
        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}

/// Diamond joining the dropdown to the trigger, drawn over the dropdown edge
/// that faces the trigger.
fn paint_pointer(
    painter: &egui::Painter,
    theme: &PickerTheme,
    placement: DropdownPlacement,
    x: f32,
    dropdown_rect: Rect,
) {
    let (edge, outward) = if placement.below {
        (dropdown_rect.top(), -1.0)
    } else {
        (dropdown_rect.bottom(), 1.0)
    };

    let tip = Pos2::new(x, edge + outward * POINTER_HALF_DIAGONAL);
    let inner = Pos2::new(x, edge - outward * POINTER_HALF_DIAGONAL);
    let left = Pos2::new(x - POINTER_HALF_DIAGONAL, edge);
    let right = Pos2::new(x + POINTER_HALF_DIAGONAL, edge);

    painter.add(Shape::convex_polygon(
        vec![tip, right, inner, left],
        theme.dropdown_background,
        Stroke::NONE,
    ));
    let border = Stroke::new(1.0, theme.dropdown_border);
    painter.line_segment([left, tip], border);
    painter.line_segment([tip, right], border);
}
