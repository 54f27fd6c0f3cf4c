//! Painter-drawn calendar glyph for the trigger button.

use egui::{Color32, Painter, Rect, Rounding, Stroke, Vec2};

/// Default icon edge length in points
pub const ICON_SIZE: f32 = 25.0;

// Glyph geometry on a 512×512 canvas
const CANVAS: f32 = 512.0;
const DOTS: [(f32, f32); 9] = [
    (296.0, 232.0),
    (376.0, 232.0),
    (296.0, 312.0),
    (376.0, 312.0),
    (136.0, 312.0),
    (216.0, 312.0),
    (136.0, 392.0),
    (216.0, 392.0),
    (296.0, 392.0),
];

pub fn paint_calendar_icon(painter: &Painter, rect: Rect, color: Color32) {
    let scale = rect.width().min(rect.height()) / CANVAS;
    let at = |x: f32, y: f32| rect.min + Vec2::new(x, y) * scale;
    let color = color.gamma_multiply(0.8);
    let stroke = Stroke::new((32.0 * scale).max(1.0), color);

    painter.rect_stroke(
        Rect::from_min_max(at(48.0, 80.0), at(464.0, 464.0)),
        Rounding::same(48.0 * scale),
        stroke,
    );
    painter.line_segment([at(48.0, 160.0), at(464.0, 160.0)], stroke);

    // Binder rings
    for x in [128.0, 384.0] {
        painter.line_segment([at(x, 48.0), at(x, 80.0)], stroke);
    }

    for (x, y) in DOTS {
        painter.circle_filled(at(x, y), 24.0 * scale, color);
    }
}

/// Allocate an icon-sized slot in `ui` and paint the glyph into it.
pub fn calendar_icon(ui: &mut egui::Ui, color: Color32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(ICON_SIZE), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        paint_calendar_icon(ui.painter(), rect, color);
    }
    response
}
