use super::field_store::{FieldMap, FieldStore};
use crate::core::Field;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der Klon der Feldsammlung findet erst beim nächsten `Arc::make_mut()`
/// im Feld-Speicher statt.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Übernommene Felder (Arc-Klon für O(1)-Snapshot)
    pub fields: Arc<FieldMap>,
    /// Feld in Arbeit zum Zeitpunkt des Snapshots
    pub current: Option<Field>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot des Feld-Speichers.
    pub fn from_store(store: &FieldStore) -> Self {
        Self {
            fields: store.shared_fields(),
            current: store.current().cloned(),
        }
    }

    /// Erstellt einen Snapshot des aktuellen Zustands.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self::from_store(&state.store)
    }

    /// Stellt den Snapshot wieder her.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state
            .store
            .restore(self.fields, self.current, state.geodesic.as_ref());
    }
}

/// Lineare Undo/Redo-History mit Cursor.
///
/// Eintrag 0 ist der Ausgangszustand; der Cursor zeigt auf den Eintrag,
/// der dem aktuellen Zustand entspricht.
#[derive(Debug, Default)]
pub struct EditHistory {
    entries: Vec<Snapshot>,
    cursor: usize,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            entries: Vec::with_capacity(max_depth.min(64) + 1),
            cursor: 0,
            max_depth,
        }
    }

    /// Verwirft alle Einträge und setzt `initial` als Eintrag 0.
    pub fn reset(&mut self, initial: Snapshot) {
        self.entries.clear();
        self.entries.push(initial);
        self.cursor = 0;
    }

    /// Nimmt einen Snapshot auf: Redo-Einträge hinter dem Cursor entfallen.
    ///
    /// Bei Überschreiten der Tiefe fällt der älteste Eintrag weg.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(snap);
        // max_depth Undo-Schritte = max_depth + 1 Einträge
        while self.entries.len() > self.max_depth + 1 {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Einen Schritt zurück; liefert den anzuwendenden Snapshot.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Einen Schritt vor; liefert den anzuwendenden Snapshot.
    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Anzahl der Einträge (inklusive Ausgangszustand).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn noch kein Eintrag existiert.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position des Cursors.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
