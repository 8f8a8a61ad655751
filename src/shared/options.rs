//! Zentrale Konfiguration für den Point Trace Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Hit-Tests ───────────────────────────────────────────────────────

/// Visueller Punktradius in Pixeln.
pub const POINT_RADIUS: f32 = 3.0;
/// Zusätzliche Klick-Toleranz um den Punktradius herum.
pub const CLICK_TOLERANCE: f32 = 5.0;
/// Toleranz für Segment-Hit-Tests in Pixeln.
pub const LINE_TOLERANCE: f32 = 5.0;

// ── Rendering ───────────────────────────────────────────────────────

/// Linienstärke der Segmente in Pixeln.
pub const LINE_WIDTH: f32 = 2.0;
/// Standard-Farbe normaler Punkte (RGBA: Schwarz).
pub const POINT_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Farbe des aktuell gezogenen Punkts (RGBA: Rot).
pub const POINT_DRAG_COLOR: [u8; 4] = [220, 30, 30, 255];
/// Farbe der Segmente (RGBA: Schwarz).
pub const LINE_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Farbe der Index-Beschriftungen (RGBA: Schwarz).
pub const LABEL_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Hintergrundfarbe der Zeichenfläche (RGBA: Grau).
pub const CANVAS_COLOR: [u8; 4] = [128, 128, 128, 255];

// ── Fenster ─────────────────────────────────────────────────────────

/// Fensterbreite beim Start in Pixeln.
pub const WINDOW_WIDTH: f32 = 800.0;
/// Fensterhöhe beim Start in Pixeln.
pub const WINDOW_HEIGHT: f32 = 700.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `point_trace_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Hit-Tests ───────────────────────────────────────────────
    /// Visueller Punktradius in Pixeln
    pub point_radius: f32,
    /// Zusätzliche Klick-Toleranz um den Punktradius herum
    pub click_tolerance: f32,
    /// Toleranz für Segment-Hit-Tests
    pub line_tolerance: f32,

    // ── Rendering ───────────────────────────────────────────────
    /// Linienstärke der Segmente
    pub line_width: f32,
    /// Farbe normaler Punkte (RGBA)
    pub point_color: [u8; 4],
    /// Farbe des gezogenen Punkts (RGBA)
    pub point_drag_color: [u8; 4],
    /// Farbe der Segmente (RGBA)
    pub line_color: [u8; 4],
    /// Farbe der Index-Beschriftungen (RGBA)
    #[serde(default = "default_label_color")]
    pub label_color: [u8; 4],
    /// Hintergrundfarbe der Zeichenfläche (RGBA)
    pub canvas_color: [u8; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            click_tolerance: CLICK_TOLERANCE,
            line_tolerance: LINE_TOLERANCE,

            line_width: LINE_WIDTH,
            point_color: POINT_COLOR,
            point_drag_color: POINT_DRAG_COLOR,
            line_color: LINE_COLOR,
            label_color: LABEL_COLOR,
            canvas_color: CANVAS_COLOR,
        }
    }
}

/// Serde-Default für `label_color` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_label_color() -> [u8; 4] {
    LABEL_COLOR
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("point_trace_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("point_trace_editor.toml")
    }

    /// Berechnet den effektiven Klick-Radius für Punkt-Hit-Tests.
    ///
    /// `point_radius + click_tolerance` — etwas größer als der sichtbare
    /// Punkt, damit Treffer nicht pixelgenau sein müssen.
    pub fn click_radius(&self) -> f32 {
        self.point_radius + self.click_tolerance
    }
}
