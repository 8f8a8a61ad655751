//! Handler für den Koordinaten-Export in die Zwischenablage.
//!
//! Der Handler bereitet nur den Export-Text vor; die eigentliche
//! Clipboard-Integration übernimmt der eframe-Loop über
//! `UiState::clipboard_payload` (das Modell kennt keine Plattform-I/O).

use crate::app::AppState;

/// Legt den Export-Text zur Übergabe an die Zwischenablage bereit.
///
/// Bei leerem Trace wird nichts kopiert, nur eine Warnung angezeigt.
pub fn copy_coordinates(state: &mut AppState) {
    if state.trace.is_empty() {
        state.ui.status_message = "No points to copy. Place some points first.".to_string();
        log::warn!("Export ohne Punkte angefordert");
        return;
    }

    let text = state.trace.export_text();
    log::info!("{} Punkte in die Zwischenablage exportiert", state.trace.point_count());
    state.ui.clipboard_payload = Some(text);
    state.ui.status_message = "Coordinates copied to clipboard!".to_string();
}
