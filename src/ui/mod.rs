//! UI-Komponenten: Toolbar, Zeichenfläche, Koordinaten-Panel, Status-Bar.
//!
//! Dieser Layer ist der Presentation-Adapter: er normalisiert egui-Input
//! zu `AppIntent`s und rendert ausschließlich aus `TraceSnapshot`-Kopien.

pub mod canvas;
pub mod coordinates;
pub mod input;
pub mod status;
pub mod toolbar;

pub use canvas::draw_canvas;
pub use coordinates::render_coordinates_panel;
pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
