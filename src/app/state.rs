//! Application State — zentrale Datenhaltung.
//!
//! Gruppiert nach Invarianten: Feld-Speicher, Bearbeitungssitzung, History,
//! View und UI-Seitenkanäle.

mod app_state;
mod dialogs;
mod editor;
mod view;

pub use app_state::AppState;
pub use dialogs::{SaveMapDialogState, UiState};
pub use editor::{EditorMode, EditorState};
pub use view::{MapInteraction, ViewState};
