use crate::app::collaborators::{FixedGeolocation, GeolocationProvider};
use crate::app::edit_session::EditSession;
use crate::app::field_store::FieldStore;
use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{GeodesicProvider, HaversineGeodesic};
use crate::shared::EditorOptions;
use crate::storage::{self, KeyValueStore, MemoryStore};
use std::time::Instant;

use super::{EditorState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Übernommene Felder und Feld in Arbeit
    pub store: FieldStore,
    /// Selektion, Hover und Drag
    pub session: EditSession,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// View-State
    pub view: ViewState,
    /// Editor-State
    pub editor: EditorState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Lokaler Speicher für Felder und gespeicherte Karten
    pub storage: Box<dyn KeyValueStore>,
    /// Distanz- und Flächenberechnung
    pub geodesic: Box<dyn GeodesicProvider>,
    /// Standortabfrage
    pub geolocation: Box<dyn GeolocationProvider>,
    /// Zeitpunkt des letzten Frame-Ticks
    pub now: Instant,
    /// Store-Revision des letzten History-Eintrags
    pub recorded_revision: u64,
    /// Committed-Revision des letzten Speichervorgangs
    pub persisted_revision: u64,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit flüchtigem Speicher.
    pub fn new() -> Self {
        let options = EditorOptions::default();
        let geolocation = FixedGeolocation::new(options.home_position);
        Self::with_services(
            options,
            Box::new(MemoryStore::new()),
            Box::new(HaversineGeodesic::new()),
            Box::new(geolocation),
        )
    }

    /// Erstellt den App-State mit konkreten Kollaborateuren.
    ///
    /// Gespeicherte Felder und Karten werden sofort geladen; der geladene
    /// Zustand ist Eintrag 0 der History.
    pub fn with_services(
        options: EditorOptions,
        storage: Box<dyn KeyValueStore>,
        geodesic: Box<dyn GeodesicProvider>,
        geolocation: Box<dyn GeolocationProvider>,
    ) -> Self {
        let fields = storage::load_fields(storage.as_ref(), geodesic.as_ref());
        let saved_maps = storage::load_saved_maps(storage.as_ref(), geodesic.as_ref());
        let store = FieldStore::from_fields(fields);

        let mut history = EditHistory::new_with_capacity(options.history_depth);
        history.reset(Snapshot::from_store(&store));

        let mut ui = UiState::new();
        ui.saved_maps = saved_maps;

        Self {
            recorded_revision: store.revision(),
            persisted_revision: store.committed_revision(),
            store,
            session: EditSession::new(),
            history,
            view: ViewState::new(options.default_center, options.default_zoom),
            editor: EditorState::new(options.measurement_debounce()),
            ui,
            options,
            command_log: CommandLog::new(),
            storage,
            geodesic,
            geolocation,
            now: Instant::now(),
            should_exit: false,
        }
    }

    /// Anzahl übernommener Felder (für UI-Anzeige)
    pub fn field_count(&self) -> usize {
        self.store.field_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
        self.recorded_revision = self.store.revision();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
