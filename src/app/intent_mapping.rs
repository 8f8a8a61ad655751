//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Das Mapping konsultiert den Modell-Zustand, um den Drag-Lebenszyklus
/// korrekt zu routen: `BeginInteraction` entsteht nur bei frischem
/// Pointer-Down im Idle-Zustand; während eines aktiven Drags wird ein
/// weiterer Pointer-Down verworfen (unter Single-Pointer-Eingabe ohnehin
/// unerreichbar).
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => {
            if state.trace.is_dragging() {
                Vec::new()
            } else {
                vec![AppCommand::BeginInteraction { pos }]
            }
        }
        AppIntent::PointerMoved { pos } => {
            let mut commands = vec![AppCommand::TrackCursor { pos }];
            if state.trace.is_dragging() {
                commands.push(AppCommand::UpdateDrag { pos });
            }
            commands
        }
        AppIntent::PointerReleased { pos } => {
            if state.trace.is_dragging() {
                vec![AppCommand::EndInteraction { pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::DeleteNearCursorRequested => vec![AppCommand::DeleteNearCursor],
        AppIntent::ClearTraceRequested => vec![AppCommand::ClearTrace],
        AppIntent::CopyCoordinatesRequested => vec![AppCommand::CopyCoordinates],
    }
}
