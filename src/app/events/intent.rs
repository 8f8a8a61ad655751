//! Intents sind normalisierte Eingaben aus UI/System ohne direkte
//! Mutationslogik.

/// Eingabe-Events des Presentation-Adapters.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste auf der Zeichenfläche gedrückt
    PointerPressed { pos: glam::Vec2 },
    /// Zeiger über der Zeichenfläche bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased { pos: glam::Vec2 },
    /// Taste `d`: Punkt nahe der Cursor-Position löschen
    DeleteNearCursorRequested,
    /// Button "Clear All Points"
    ClearTraceRequested,
    /// Button "Copy Coordinates"
    CopyCoordinatesRequested,
}
