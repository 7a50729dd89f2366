use crate::app::timing::Debounce;
use std::time::Duration;

/// Editor-Modus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Standard: Eckpunkte auswählen und verschieben
    #[default]
    Edit,
    /// Kartenklicks hängen Punkte an das aktuelle Feld an
    Draw,
}

/// Zustand des Editors
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Aktiver Modus
    pub mode: EditorMode,
    /// Verzögerte Neuberechnung der Messwerte des aktuellen Feldes
    pub measurement_debounce: Debounce,
}

impl EditorState {
    /// Erstellt den Editor-Zustand (Edit-Modus aktiv).
    pub fn new(debounce: Duration) -> Self {
        Self {
            mode: EditorMode::Edit,
            measurement_debounce: Debounce::new(debounce),
        }
    }

    /// Gibt `true` zurück, wenn Kartenklicks Punkte anhängen.
    pub fn is_drawing(&self) -> bool {
        self.mode == EditorMode::Draw
    }
}
