//! Koordinaten-Panel: listet alle Punkte plus den Copy-ready-Export.

use crate::app::AppState;

/// Rendert das Koordinaten-Panel am unteren Rand (über der Status-Bar).
pub fn render_coordinates_panel(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("coordinates")
        .resizable(true)
        .default_height(160.0)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("Coordinates").strong());

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if state.trace.is_empty() {
                        ui.label("No points placed.");
                        return;
                    }

                    ui.label("Placed Points:");
                    for (i, point) in state.trace.points().iter().enumerate() {
                        ui.monospace(format!("Point {}: ({}, {})", i + 1, point.x, point.y));
                    }

                    ui.separator();
                    ui.label("Copy-ready format:");
                    ui.monospace(format!("Coordinates: {}", state.trace.export_text()));
                });
        });
}
