//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Trace-Editing ===
            AppCommand::BeginInteraction { pos } => handlers::editing::begin_interaction(state, pos),
            AppCommand::TrackCursor { pos } => handlers::editing::track_cursor(state, pos),
            AppCommand::UpdateDrag { pos } => handlers::editing::update_drag(state, pos),
            AppCommand::EndInteraction { pos } => handlers::editing::end_interaction(state, pos),
            AppCommand::DeleteNearCursor => handlers::editing::delete_near_cursor(state),
            AppCommand::ClearTrace => handlers::editing::clear_trace(state),

            // === Export ===
            AppCommand::CopyCoordinates => handlers::export::copy_coordinates(state),
        }

        Ok(())
    }
}
