//! Core-Domänenlogik: Trace-Modell und geometrische Hit-Tests.
//!
//! Dieses Modul ist frei von UI-Abhängigkeiten und vollständig headless
//! testbar. Es definiert:
//! - TraceModel: geordnete Punktfolge mit Drag-Zustandsmaschine
//! - Hit-Test-Funktionen: Punkt-/Segment-Proximity und Segment-Projektion

pub mod trace;

pub use trace::{InteractionResult, TraceModel, TraceSnapshot};
