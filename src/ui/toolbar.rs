//! Toolbar mit den Trace-Aktionen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Point Trace Editor");
            ui.separator();

            if ui.button("Clear All Points").clicked() {
                events.push(AppIntent::ClearTraceRequested);
            }

            // Bei leerem Trace bewusst klickbar: der Handler meldet dann
            // "No points to copy" in der Statuszeile
            if ui.button("Copy Coordinates").clicked() {
                events.push(AppIntent::CopyCoordinatesRequested);
            }

            ui.separator();
            ui.label(format!("Points: {}", state.point_count()));
        });
    });

    events
}
