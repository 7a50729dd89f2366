//! UI-Komponenten: Toolbar, Seitenleiste, Kartenansicht, Dialoge.

pub mod dialogs;
mod keyboard;
/// Kartenansicht
///
/// Zeichnet Felder, Eckpunkte, Mittelpunkt-Griffe und Kantenlängen und
/// übersetzt Maus-Eingaben im Viewport in `AppIntent`s.
pub mod map_view;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use dialogs::{show_alert_dialog, show_save_map_dialog};
pub use map_view::{paint_scene, MapViewState};
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
