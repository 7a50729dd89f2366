use crate::core::{FieldId, SavedMap};
use std::time::Instant;

/// Zustand des Karte-Speichern-Dialogs
#[derive(Debug, Clone, Default)]
pub struct SaveMapDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Zu speicherndes Feld
    pub field: Option<FieldId>,
    /// Name der Karte
    pub name: String,
    /// Beschreibung
    pub description: String,
    /// Gruppe
    pub group: String,
}

impl SaveMapDialogState {
    /// Erstellt einen geschlossenen Dialog-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Sichtbare Meldung (z.B. Ortungsfehler)
    pub alert: Option<String>,
    /// Frist der laufenden Standortabfrage
    pub locate_deadline: Option<Instant>,
    /// Gespeicherte Karten (Cache des Speichers)
    pub saved_maps: Vec<SavedMap>,
    /// Karte-Speichern-Dialog
    pub save_dialog: SaveMapDialogState,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
    /// Die Szene muss neu gezeichnet werden
    pub needs_redraw: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, solange eine Standortabfrage läuft.
    pub fn is_locating(&self) -> bool {
        self.locate_deadline.is_some()
    }
}
