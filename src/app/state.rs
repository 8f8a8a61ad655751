//! Application State: Trace-Modell, UI-Zustand und Optionen.

use crate::app::CommandLog;
use crate::core::TraceModel;
use crate::shared::EditorOptions;

/// Bedienhinweis, der beim Start in der Statuszeile steht.
pub const STATUS_HINT: &str =
    "Click: place/drag points or insert on lines, 'd': delete point near cursor";

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct UiState {
    /// Aktuelle Statusnachricht (Statuszeile am unteren Rand)
    pub status_message: String,
    /// Vorbereiteter Export-Text; der eframe-Loop legt ihn in die
    /// Zwischenablage und leert das Feld
    pub clipboard_payload: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand mit Bedienhinweis.
    pub fn new() -> Self {
        Self {
            status_message: STATUS_HINT.to_string(),
            clipboard_payload: None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das Trace-Modell (alleiniger Besitzer von Punktfolge und Drag-Zustand)
    pub trace: TraceModel,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Radien, Farben, Linienstärken)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit den übergebenen Optionen;
    /// die Hit-Test-Schwellwerte des Modells werden daraus abgeleitet.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            trace: TraceModel::with_thresholds(options.click_radius(), options.line_tolerance),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige).
    pub fn point_count(&self) -> usize {
        self.trace.point_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
