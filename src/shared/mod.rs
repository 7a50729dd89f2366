//! Verträge zwischen `app` und `ui`.
//!
//! `FieldScene` wird pro Frame vom Controller gebaut und von der
//! Kartenansicht gelesen; `EditorOptions` lesen beide Seiten.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{FieldScene, FieldShape};
