//! Handler für Trace-Mutationen: Drag-Lebenszyklus, Einfügen, Löschen, Leeren.
//!
//! Jeder Handler ruft die Modell-Operation auf und übersetzt das
//! [`InteractionResult`] in eine Statusnachricht. Indizes werden in der
//! Statuszeile 1-basiert angezeigt.

use crate::app::AppState;
use crate::core::InteractionResult;
use glam::Vec2;

/// Formatiert eine Position als `(x, y)` (ganzzahlig ohne Nachkommastellen).
fn format_pos(pos: Vec2) -> String {
    format!("({}, {})", pos.x, pos.y)
}

/// Interpretiert einen frischen Pointer-Down: Drag-Start, Insert oder Append.
pub fn begin_interaction(state: &mut AppState, pos: Vec2) {
    match state.trace.begin_interaction(pos) {
        InteractionResult::DragStarted { index } => {
            state.ui.status_message = format!("Dragging point {}", index + 1);
            log::info!("Drag auf Punkt {} gestartet", index + 1);
        }
        InteractionResult::PointInserted { index, pos } => {
            state.ui.status_message = format!(
                "Point inserted at position {}: {}",
                index + 1,
                format_pos(pos)
            );
            log::info!("Punkt an Position {} eingefügt: {}", index + 1, format_pos(pos));
        }
        InteractionResult::PointAppended { index, pos } => {
            state.ui.status_message =
                format!("Point {} placed at {}", index + 1, format_pos(pos));
            log::info!("Punkt {} platziert: {}", index + 1, format_pos(pos));
        }
        other => {
            // begin_interaction liefert nur die drei obigen Varianten
            log::warn!("Unerwartetes Interaktionsergebnis: {:?}", other);
        }
    }
}

/// Führt die Cursor-Position im Modell nach.
pub fn track_cursor(state: &mut AppState, pos: Vec2) {
    state.trace.set_cursor(pos);
}

/// Aktualisiert die Koordinaten des gezogenen Punkts.
pub fn update_drag(state: &mut AppState, pos: Vec2) {
    if let InteractionResult::PointMoved { index, pos } = state.trace.update_drag(pos) {
        state.ui.status_message = format!("Moving point {} to {}", index + 1, format_pos(pos));
    }
}

/// Schließt einen aktiven Drag ab.
pub fn end_interaction(state: &mut AppState, pos: Vec2) {
    if let InteractionResult::DragEnded { index, pos } = state.trace.end_interaction(pos) {
        state.ui.status_message = format!("Point {} moved to {}", index + 1, format_pos(pos));
        log::info!("Punkt {} verschoben nach {}", index + 1, format_pos(pos));
    }
}

/// Löscht den Punkt nahe der zuletzt bekannten Cursor-Position.
pub fn delete_near_cursor(state: &mut AppState) {
    let cursor = state.trace.cursor();
    match state.trace.delete_near(cursor) {
        InteractionResult::PointDeleted { index, pos } => {
            state.ui.status_message = format!("Deleted point at {}", format_pos(pos));
            log::info!("Punkt {} gelöscht: {}", index + 1, format_pos(pos));
        }
        InteractionResult::NotFound => {
            state.ui.status_message = "No point near mouse cursor to delete".to_string();
        }
        other => {
            log::warn!("Unerwartetes Löschergebnis: {:?}", other);
        }
    }
}

/// Entfernt alle Punkte und beendet einen eventuell aktiven Drag.
pub fn clear_trace(state: &mut AppState) {
    state.trace.clear();
    state.ui.status_message = "All points cleared".to_string();
    log::info!("Alle Punkte entfernt");
}
