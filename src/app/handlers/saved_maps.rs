//! Handler für gespeicherte, benannte Karten.

use crate::app::collaborators::MapSurface;
use crate::app::AppState;
use crate::core::{FieldId, SavedMap};
use crate::storage;

/// Öffnet den Speichern-Dialog für ein Feld.
pub fn open_dialog(state: &mut AppState, field: FieldId) {
    if !state.store.fields().contains_key(&field) {
        log::debug!("Speichern-Dialog: Feld {} nicht vorhanden", field);
        return;
    }
    let dialog = &mut state.ui.save_dialog;
    dialog.visible = true;
    dialog.field = Some(field);
    dialog.name.clear();
    dialog.description.clear();
    dialog.group.clear();
}

/// Schließt den Speichern-Dialog.
pub fn close_dialog(state: &mut AppState) {
    state.ui.save_dialog.visible = false;
    state.ui.save_dialog.field = None;
}

fn persist(state: &mut AppState) {
    if let Err(e) = storage::write_saved_maps(state.storage.as_mut(), &state.ui.saved_maps) {
        log::error!("Gespeicherte Karten konnten nicht geschrieben werden: {:#}", e);
    }
}

/// Speichert ein übernommenes Feld unter einem Namen.
pub fn save(state: &mut AppState, field_id: FieldId, name: &str, description: &str, group: &str) {
    if name.trim().is_empty() {
        state.ui.status_message = Some("Bitte einen Namen angeben".to_string());
        return;
    }
    let Some(field) = state.store.fields().get(&field_id).cloned() else {
        log::debug!("Karte speichern: Feld {} nicht vorhanden", field_id);
        return;
    };

    let id = storage::next_saved_map_id(&state.ui.saved_maps);
    let map = SavedMap::new(id, name, description, group, field);
    log::info!("Karte '{}' gespeichert", map.name);
    state.ui.status_message = Some(format!("Karte '{}' gespeichert", map.name));
    state.ui.saved_maps.push(map);
    persist(state);
}

/// Lädt eine gespeicherte Karte als neues Feld und zentriert die Ansicht.
pub fn load(state: &mut AppState, id: u64) {
    let Some(map) = state.ui.saved_maps.iter().find(|m| m.id == id) else {
        log::debug!("Gespeicherte Karte {} nicht vorhanden", id);
        return;
    };
    let points = map.field.points.clone();
    let name = map.name.clone();

    let first = points.first().copied();
    if state
        .store
        .import_field(points, state.geodesic.as_ref())
        .is_some()
    {
        if let Some(first) = first {
            state.view.pan_to(first);
        }
        log::info!("Karte '{}' geladen", name);
    }
}

/// Löscht eine gespeicherte Karte.
pub fn delete(state: &mut AppState, id: u64) {
    let before = state.ui.saved_maps.len();
    state.ui.saved_maps.retain(|m| m.id != id);
    if state.ui.saved_maps.len() != before {
        log::info!("Gespeicherte Karte {} gelöscht", id);
        persist(state);
    }
}
