//! Handler für Feld-Lebenszyklus und Kantenlängen.

use crate::app::state::EditorMode;
use crate::app::AppState;
use crate::core::{adjust_line_length, FieldId, FieldTarget, GeoPoint};
use crate::storage;

/// Legt ein neues aktuelles Feld an.
pub fn create_field(state: &mut AppState) {
    state.editor.measurement_debounce.cancel();
    state.store.create_field(state.geodesic.as_ref());
}

/// Hängt einen Punkt an und plant die Neuberechnung der Messwerte.
pub fn append_point(state: &mut AppState, point: GeoPoint) {
    if !state.editor.is_drawing() {
        log::debug!("Nicht im Zeichenmodus, Punkt ignoriert");
        return;
    }
    if state.store.append_point(point) {
        state.editor.measurement_debounce.schedule(state.now);
    }
}

/// Übernimmt das aktuelle Feld (Messwerte sofort, nicht verzögert).
pub fn finalize_field(state: &mut AppState) {
    state.editor.measurement_debounce.cancel();
    state.store.finalize_current_field(state.geodesic.as_ref());
}

/// Löscht ein übernommenes Feld.
pub fn delete_field(state: &mut AppState, id: FieldId) {
    if state.store.delete_field(id) {
        state.session.set_hovered(None);
        state.session.clear_selection();
    }
}

/// Löscht alle Felder und entfernt den Speicherschlüssel.
pub fn clear_all(state: &mut AppState) {
    state.editor.measurement_debounce.cancel();
    state.session.reset(&mut state.view);
    state.store.clear_all();

    match storage::clear_fields(state.storage.as_mut()) {
        // Leere Sammlung nicht erneut unter dem Schlüssel ablegen
        Ok(()) => state.persisted_revision = state.store.committed_revision(),
        Err(e) => log::error!("Speicherschlüssel konnte nicht entfernt werden: {:#}", e),
    }
}

/// Setzt den Editor-Modus.
pub fn set_editor_mode(state: &mut AppState, mode: EditorMode) {
    if state.editor.mode == mode {
        return;
    }
    if mode == EditorMode::Draw {
        state.session.clear_selection();
    }
    state.editor.mode = mode;
    log::info!("Editor-Modus: {:?}", mode);
}

/// Setzt die Länge einer Kante (Endpunkt wird verschoben).
pub fn set_edge_length(state: &mut AppState, target: FieldTarget, edge_index: usize, length: f64) {
    let Some(points) = state.store.points(target) else {
        log::debug!("Kantenlänge: Feld {:?} nicht vorhanden", target);
        return;
    };

    let adjusted = adjust_line_length(state.geodesic.as_ref(), points, edge_index, length);
    if adjusted.as_slice() == points {
        log::debug!("Kantenlänge: keine Änderung an Kante {}", edge_index);
        return;
    }

    if state
        .store
        .update_field_points(target, adjusted, state.geodesic.as_ref())
    {
        log::info!("Kante {} auf {:.1} m gesetzt", edge_index, length);
    }
}
