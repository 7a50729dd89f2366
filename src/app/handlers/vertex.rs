//! Handler für Auswahl, Hover und Drag von Eckpunkten.

use crate::app::edit_session::{EditSession, SessionContext};
use crate::app::AppState;
use crate::core::{FieldTarget, GeoPoint, VertexRef};

/// Teilt den State in Sitzung und Kollaborateure auf.
fn session_parts(state: &mut AppState) -> (&mut EditSession, SessionContext<'_>) {
    let AppState {
        session,
        store,
        view,
        geodesic,
        ..
    } = state;
    (
        session,
        SessionContext {
            store,
            map: view,
            geodesic: &**geodesic,
        },
    )
}

/// Wählt einen Eckpunkt aus.
pub fn select(state: &mut AppState, vertex: VertexRef) {
    state.session.select(&state.store, vertex);
}

/// Hebt die Auswahl auf.
pub fn clear_selection(state: &mut AppState) {
    state.session.clear_selection();
}

/// Setzt den Hover-Seitenkanal.
pub fn set_hovered(state: &mut AppState, vertex: Option<VertexRef>) {
    if state.session.hovered() != vertex {
        state.session.set_hovered(vertex);
        state.ui.needs_redraw = true;
    }
}

/// Startet das Verschieben eines Eckpunkts.
pub fn start_move(state: &mut AppState, vertex: VertexRef) {
    let (session, mut ctx) = session_parts(state);
    session.start_move(&mut ctx, vertex.target, vertex.index);
}

/// Bewegt den gezogenen Punkt im Entwurf.
pub fn drag_to(state: &mut AppState, point: GeoPoint) {
    state.session.drag_to(point);
}

/// Übernimmt den laufenden Drag.
pub fn commit(state: &mut AppState) {
    let (session, mut ctx) = session_parts(state);
    if session.commit(&mut ctx) {
        log::debug!("Drag übernommen");
    }
}

/// Fügt einen Mittelpunkt ein und beginnt ihn zu ziehen.
pub fn insert_at_midpoint(
    state: &mut AppState,
    target: FieldTarget,
    edge_index: usize,
    point: GeoPoint,
) {
    let (session, mut ctx) = session_parts(state);
    session.insert_at_midpoint(&mut ctx, target, edge_index, point);
}

/// Bricht den laufenden Drag ab.
pub fn cancel(state: &mut AppState) {
    state.session.cancel(&mut state.view);
}

/// Entfernt einen Eckpunkt; ein laufender Drag wird vorher verworfen.
pub fn delete(state: &mut AppState, vertex: VertexRef) {
    if state.session.is_dragging() {
        state.session.cancel(&mut state.view);
    }
    if state
        .store
        .delete_vertex(vertex.target, vertex.index, state.geodesic.as_ref())
    {
        log::info!("Eckpunkt {} entfernt", vertex.index);
        state.session.clear_selection();
        state.session.set_hovered(None);
    }
}
