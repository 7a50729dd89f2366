//! Handler für den Frame-Tick (Debounce, Ortung, Drag-Redraw).

use super::location;
use crate::app::AppState;
use std::time::Instant;

/// Führt alle zeitgesteuerten Aufgaben zum Zeitpunkt `now` aus.
pub fn tick(state: &mut AppState, now: Instant) {
    state.now = now;

    if state.editor.measurement_debounce.fire_if_due(now)
        && state.store.recompute_current(state.geodesic.as_ref())
    {
        state.ui.needs_redraw = true;
    }

    location::poll(state, now);

    // Höchstens ein Redraw pro Frame, unabhängig von der Anzahl Drag-Events
    if state.session.take_frame_pending() {
        state.ui.needs_redraw = true;
    }
}
