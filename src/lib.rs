//! Field Mapper Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod storage;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorMode, FieldStore, UiState, ViewState,
};
pub use core::{
    EdgeMeasurement, Field, FieldId, FieldTarget, GeoPoint, GeodesicProvider, HaversineGeodesic,
    MapCamera, SavedMap, VertexRef,
};
pub use shared::{EditorOptions, FieldScene, FieldShape};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
