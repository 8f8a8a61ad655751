//! Das zentrale Trace-Datenmodell: geordnete Punktfolge plus Drag-Zustand.
//!
//! `TraceModel` ist alleiniger Besitzer der Punktfolge und interpretiert
//! Positionseingaben über die Hit-Tests in [`super::hit_test`]. Die UI sieht
//! den Zustand ausschließlich über [`TraceSnapshot`]-Kopien.

use super::hit_test;
use glam::Vec2;

use crate::shared::options::{CLICK_TOLERANCE, LINE_TOLERANCE, POINT_RADIUS};

/// Ergebnis einer Modell-Operation.
///
/// Jede Variante trägt genug Daten (Index, Koordinaten), damit der
/// Presentation-Adapter daraus eine Statuszeile bauen kann.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionResult {
    /// Drag auf einen existierenden Punkt gestartet
    DragStarted { index: usize },
    /// Neuer Punkt auf einem Segment eingefügt (index = Segment-Index + 1)
    PointInserted { index: usize, pos: Vec2 },
    /// Neuer Punkt ans Ende der Folge angehängt
    PointAppended { index: usize, pos: Vec2 },
    /// Koordinaten des gezogenen Punkts aktualisiert
    PointMoved { index: usize, pos: Vec2 },
    /// Drag abgeschlossen (inklusive finalem Koordinaten-Update)
    DragEnded { index: usize, pos: Vec2 },
    /// Punkt entfernt, nachfolgende Indizes rücken um eins auf
    PointDeleted { index: usize, pos: Vec2 },
    /// Kein Punkt innerhalb des Klick-Radius gefunden
    NotFound,
    /// Drag-Operation ohne aktiven Drag (tolerierter No-op)
    NotDragging,
    /// Folge geleert
    Cleared,
}

/// Read-only Momentaufnahme für das Rendering.
#[derive(Debug, Clone, Default)]
pub struct TraceSnapshot {
    /// Punktfolge in Trace-Reihenfolge
    pub points: Vec<Vec2>,
    /// Index des aktuell gezogenen Punkts (None = kein Drag aktiv)
    pub drag_index: Option<usize>,
}

/// Geordnete 2D-Punktfolge mit Drag-Zustandsmaschine.
///
/// Zustände: **Idle** und **Dragging(index)**. Einfügen und Anhängen sind
/// nur aus Idle erreichbar; das Intent-Mapping ruft `begin_interaction`
/// ausschließlich bei frischem Pointer-Down auf. `drag` speichert einen
/// Index in die lebende Folge und wird von jeder Index-verschiebenden
/// Mutation explizit invalidiert oder angepasst.
#[derive(Debug, Clone)]
pub struct TraceModel {
    /// Punktfolge; Index = Position entlang des Trace
    points: Vec<Vec2>,
    /// Aktiver Drag (Index in `points`)
    drag: Option<usize>,
    /// Letzte bekannte Cursor-Position (für Löschen-nahe-Cursor)
    cursor: Vec2,
    /// Trefferradius für Punkt-Hit-Tests
    click_radius: f32,
    /// Toleranz für Segment-Hit-Tests
    line_tolerance: f32,
}

impl TraceModel {
    /// Erstellt ein leeres Modell mit den Standard-Schwellwerten
    /// (Punktradius 3 px + Toleranz 5 px ⇒ Klick-Radius 8 px).
    pub fn new() -> Self {
        Self::with_thresholds(POINT_RADIUS + CLICK_TOLERANCE, LINE_TOLERANCE)
    }

    /// Erstellt ein leeres Modell mit expliziten Schwellwerten.
    pub fn with_thresholds(click_radius: f32, line_tolerance: f32) -> Self {
        Self {
            points: Vec::new(),
            drag: None,
            cursor: Vec2::ZERO,
            click_radius,
            line_tolerance,
        }
    }

    /// Passt die Hit-Test-Schwellwerte zur Laufzeit an.
    pub fn set_thresholds(&mut self, click_radius: f32, line_tolerance: f32) {
        self.click_radius = click_radius;
        self.line_tolerance = line_tolerance;
    }

    /// Interpretiert einen frischen Pointer-Down an `pos`.
    ///
    /// Reihenfolge der Klassifikation:
    /// 1. Punkt innerhalb des Klick-Radius → Drag starten
    ///    (niedrigster Index gewinnt bei mehreren Treffern)
    /// 2. Segment innerhalb der Linien-Toleranz → Punkt dahinter einfügen
    /// 3. sonst → Punkt ans Ende anhängen
    pub fn begin_interaction(&mut self, pos: Vec2) -> InteractionResult {
        if let Some(index) = hit_test::nearest_point_index(&self.points, pos, self.click_radius) {
            self.drag = Some(index);
            return InteractionResult::DragStarted { index };
        }

        if let Some(segment) =
            hit_test::nearest_segment_index(&self.points, pos, self.line_tolerance)
        {
            let index = segment + 1;
            self.points.insert(index, pos);
            return InteractionResult::PointInserted { index, pos };
        }

        self.points.push(pos);
        InteractionResult::PointAppended {
            index: self.points.len() - 1,
            pos,
        }
    }

    /// Überschreibt die Koordinaten des gezogenen Punkts.
    ///
    /// Ohne aktiven Drag ein tolerierter No-op (`NotDragging`).
    /// Die Länge der Folge ändert sich nie.
    pub fn update_drag(&mut self, pos: Vec2) -> InteractionResult {
        let Some(index) = self.drag else {
            return InteractionResult::NotDragging;
        };

        self.points[index] = pos;
        InteractionResult::PointMoved { index, pos }
    }

    /// Schließt einen aktiven Drag ab: finales Koordinaten-Update,
    /// dann Übergang zurück nach Idle.
    pub fn end_interaction(&mut self, pos: Vec2) -> InteractionResult {
        let Some(index) = self.drag.take() else {
            return InteractionResult::NotDragging;
        };

        self.points[index] = pos;
        InteractionResult::DragEnded { index, pos }
    }

    /// Entfernt den ersten Punkt innerhalb des Klick-Radius um `pos`.
    ///
    /// Gleicher Proximity-Test und Tie-Break wie `begin_interaction`.
    /// Wird gerade der entfernte Punkt gezogen, endet der Drag; bei
    /// `NotFound` bleibt die Folge unverändert.
    pub fn delete_near(&mut self, pos: Vec2) -> InteractionResult {
        let Some(index) = hit_test::nearest_point_index(&self.points, pos, self.click_radius)
        else {
            return InteractionResult::NotFound;
        };

        let removed = self.points.remove(index);

        // Drag-Index invalidieren bzw. an die verschobene Folge anpassen
        match self.drag {
            Some(drag_index) if drag_index == index => self.drag = None,
            Some(drag_index) if drag_index > index => self.drag = Some(drag_index - 1),
            _ => {}
        }

        InteractionResult::PointDeleted {
            index,
            pos: removed,
        }
    }

    /// Leert die Folge und beendet einen eventuell aktiven Drag.
    pub fn clear(&mut self) -> InteractionResult {
        self.points.clear();
        self.drag = None;
        InteractionResult::Cleared
    }

    /// Aktualisiert die zuletzt bekannte Cursor-Position.
    pub fn set_cursor(&mut self, pos: Vec2) {
        self.cursor = pos;
    }

    /// Zuletzt bekannte Cursor-Position.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Gibt zurück, ob gerade ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Index des aktuell gezogenen Punkts (None = kein Drag aktiv).
    pub fn drag_index(&self) -> Option<usize> {
        self.drag
    }

    /// Read-only Sicht auf die Punktfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Anzahl der Punkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Gibt zurück, ob die Folge leer ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Erzeugt eine Momentaufnahme für das Rendering.
    pub fn snapshot(&self) -> TraceSnapshot {
        TraceSnapshot {
            points: self.points.clone(),
            drag_index: self.drag,
        }
    }

    /// Exportiert die Folge als `"(x1, y1), (x2, y2), ..."`.
    ///
    /// Koordinaten werden über `Display` formatiert: ganzzahlige Positionen
    /// exportieren ohne Nachkommastellen. Leere Folge ergibt `""`.
    pub fn export_text(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("({}, {})", p.x, p.y))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for TraceModel {
    fn default() -> Self {
        Self::new()
    }
}
