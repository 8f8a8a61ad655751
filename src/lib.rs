//! Point Trace Editor - Bibliothekswurzel.
//!
//! - `core`: reines Datenmodell (Punktfolge, Hit-Testing, Drag-Zustand)
//! - `app`: Controller, Events und Handler
//! - `shared`: Optionen und Konstanten
//! - `ui`: egui-Panels und Canvas-Rendering

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, STATUS_HINT};
pub use core::{InteractionResult, TraceModel, TraceSnapshot};
pub use shared::EditorOptions;
