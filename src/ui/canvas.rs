//! Zeichenfläche: rendert Segmente, Punkte und Index-Beschriftungen.
//!
//! Gezeichnet wird ausschließlich aus einer [`TraceSnapshot`]-Kopie:
//! Segmente unter den Punkten, gezogener Punkt hervorgehoben, 1-basierte
//! Nummern-Labels rechts oberhalb jedes Punkts.

use crate::core::TraceSnapshot;
use crate::shared::EditorOptions;

/// Wandelt eine RGBA-Farboption in eine egui-Farbe um.
fn color(rgba: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Rechnet Canvas-Koordinaten in Screen-Koordinaten um.
fn canvas_to_screen(pos: glam::Vec2, rect: egui::Rect) -> egui::Pos2 {
    rect.min + egui::vec2(pos.x, pos.y)
}

/// Zeichnet den Trace auf die Zeichenfläche.
pub fn draw_canvas(
    painter: &egui::Painter,
    rect: egui::Rect,
    snapshot: &TraceSnapshot,
    options: &EditorOptions,
) {
    painter.rect_filled(rect, 0.0, color(options.canvas_color));

    // Segmente zwischen konsekutiven Punkten
    for pair in snapshot.points.windows(2) {
        painter.line_segment(
            [
                canvas_to_screen(pair[0], rect),
                canvas_to_screen(pair[1], rect),
            ],
            egui::Stroke::new(options.line_width, color(options.line_color)),
        );
    }

    // Punkte (gezogener Punkt hervorgehoben) und Nummern-Labels
    for (i, &point) in snapshot.points.iter().enumerate() {
        let center = canvas_to_screen(point, rect);
        let dragging = snapshot.drag_index == Some(i);

        let fill = if dragging {
            color(options.point_drag_color)
        } else {
            color(options.point_color)
        };
        let outline_width = if dragging { 2.0 } else { 1.0 };

        painter.circle(
            center,
            options.point_radius,
            fill,
            egui::Stroke::new(outline_width, egui::Color32::BLACK),
        );

        painter.text(
            center + egui::vec2(10.0, -10.0),
            egui::Align2::CENTER_CENTER,
            (i + 1).to_string(),
            egui::FontId::proportional(10.0),
            color(options.label_color),
        );
    }
}
