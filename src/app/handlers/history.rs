//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Stellt einen Snapshot her und setzt transiente Zustände zurück.
fn restore(state: &mut AppState, snapshot: Snapshot) {
    // Kein Handle (Auswahl, Hover, Drag) darf den Sprung überleben
    state.session.reset(&mut state.view);
    state.editor.measurement_debounce.cancel();
    snapshot.apply_to(state);
    state.recorded_revision = state.store.revision();
    state.ui.needs_redraw = true;
}

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    if let Some(prev) = state.history.undo() {
        restore(state, prev);
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    if let Some(next) = state.history.redo() {
        restore(state, next);
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
