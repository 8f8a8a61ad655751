//! Commands sind mutierende Schritte, die zentral ausgeführt werden.

/// Ausführbare Schritte auf dem AppState.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Frischen Pointer-Down interpretieren (Drag-Start, Insert oder Append)
    BeginInteraction { pos: glam::Vec2 },
    /// Cursor-Position im Modell nachführen
    TrackCursor { pos: glam::Vec2 },
    /// Koordinaten des gezogenen Punkts aktualisieren
    UpdateDrag { pos: glam::Vec2 },
    /// Aktiven Drag abschließen
    EndInteraction { pos: glam::Vec2 },
    /// Punkt nahe der zuletzt bekannten Cursor-Position löschen
    DeleteNearCursor,
    /// Alle Punkte entfernen
    ClearTrace,
    /// Koordinaten-Export in die Zwischenablage vorbereiten
    CopyCoordinates,
}
