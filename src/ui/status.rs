//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Points: {}", state.point_count()));

            ui.separator();

            let cursor = state.trace.cursor();
            ui.label(format!("Cursor: ({:.0}, {:.0})", cursor.x, cursor.y));

            ui.separator();

            if let Some(drag_index) = state.trace.drag_index() {
                ui.label(format!("Dragging: point {}", drag_index + 1));
                ui.separator();
            }

            ui.label(&state.ui.status_message);
        });
    });
}
