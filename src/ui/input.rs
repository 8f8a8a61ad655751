//! Canvas-Input-Handling: Maus- und Tastatur-Events → AppIntent.

use crate::app::AppIntent;

/// Verwaltet den Input-Zustand der Zeichenfläche.
#[derive(Default)]
pub struct InputState {
    /// Primäre Maustaste wurde auf der Zeichenfläche gedrückt
    /// (Release-Events außerhalb eigener Presses werden ignoriert)
    pointer_down: bool,
    /// Zuletzt gemeldete Cursor-Position in Canvas-Koordinaten
    last_cursor: Option<glam::Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pointer_down: false,
            last_cursor: None,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Positionen werden in Canvas-Koordinaten (relativ zur linken oberen
    /// Ecke der Zeichenfläche) gemeldet. Die Reihenfolge pro Frame ist
    /// Move → Press → Release, damit der Drag-Lebenszyklus im Controller
    /// konsistent abläuft.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        // Während eines aktiven Drags liefert interact_pointer_pos die
        // Position auch außerhalb der Hover-Erkennung
        let screen_pos = response
            .interact_pointer_pos()
            .or_else(|| response.hover_pos());

        if let Some(screen_pos) = screen_pos {
            let pos = screen_to_canvas(screen_pos, response);
            if self.last_cursor != Some(pos) {
                events.push(AppIntent::PointerMoved { pos });
                self.last_cursor = Some(pos);
            }
        }

        let (primary_pressed, primary_released) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
            )
        });

        if primary_pressed && response.hovered() {
            if let Some(screen_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::PointerPressed {
                    pos: screen_to_canvas(screen_pos, response),
                });
                self.pointer_down = true;
            }
        }

        if primary_released && self.pointer_down {
            self.pointer_down = false;
            let pos = screen_pos
                .map(|p| screen_to_canvas(p, response))
                .or(self.last_cursor);
            if let Some(pos) = pos {
                events.push(AppIntent::PointerReleased { pos });
            }
        }

        // Taste `d`: Punkt nahe der Cursor-Position löschen
        if response.hovered() && ui.input(|i| i.key_pressed(egui::Key::D)) {
            events.push(AppIntent::DeleteNearCursorRequested);
        }

        events
    }
}

/// Rechnet eine Screen-Position in Canvas-Koordinaten um.
fn screen_to_canvas(screen_pos: egui::Pos2, response: &egui::Response) -> glam::Vec2 {
    let local = screen_pos - response.rect.min;
    glam::Vec2::new(local.x, local.y)
}
