//! Application-Layer: Controller, State, Events und Handler.

pub mod collaborators;
pub mod command_log;
pub mod controller;
pub mod edit_session;
pub mod events;
pub mod field_store;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Felder, Sitzung, View).
pub mod state;
pub mod timing;

pub use collaborators::{
    FixedGeolocation, GeolocationError, GeolocationOptions, GeolocationProvider, MapSurface,
};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use edit_session::{DragKind, DragSession, EditSession, SessionContext, SessionPhase};
pub use events::{AppCommand, AppIntent};
pub use field_store::{FieldMap, FieldStore};
pub use history::{EditHistory, Snapshot};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorMode, EditorState, MapInteraction, UiState, ViewState};
pub use timing::Debounce;
