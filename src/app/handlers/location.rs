//! Handler für die Standortabfrage und Meldungen.

use crate::app::collaborators::{GeolocationError, GeolocationOptions, MapSurface};
use crate::app::AppState;
use std::time::Instant;

/// Startet eine Standortabfrage. Eine laufende Abfrage wird nicht verdoppelt.
pub fn request(state: &mut AppState) {
    if state.ui.is_locating() {
        log::debug!("Standortabfrage läuft bereits");
        return;
    }
    let options = GeolocationOptions {
        timeout_ms: state.options.geolocation_timeout_ms,
        high_accuracy: state.options.geolocation_high_accuracy,
    };
    state.ui.locate_deadline = Some(state.now + state.options.geolocation_timeout());
    state.geolocation.request(&options);
    log::info!("Standortabfrage gestartet");
}

/// Fragt das Ergebnis einer laufenden Standortabfrage ab.
///
/// `locating` wird in jedem Ausgang (Erfolg, Fehler, Zeitlimit) beendet.
pub fn poll(state: &mut AppState, now: Instant) {
    let Some(deadline) = state.ui.locate_deadline else {
        return;
    };

    match state.geolocation.poll() {
        Some(Ok(position)) => {
            state.ui.locate_deadline = None;
            let zoom = state.options.locate_zoom;
            state.view.pan_to(position);
            state.view.set_zoom(zoom);
            state.ui.needs_redraw = true;
            log::info!("Standort gefunden: {}", position);
        }
        Some(Err(e)) => fail(state, e),
        None if now >= deadline => fail(state, GeolocationError::Timeout),
        None => {}
    }
}

fn fail(state: &mut AppState, error: GeolocationError) {
    state.ui.locate_deadline = None;
    state.ui.alert = Some(error.to_string());
    state.ui.needs_redraw = true;
    log::warn!("Standortabfrage fehlgeschlagen: {}", error);
}

/// Schließt die sichtbare Meldung.
pub fn dismiss_alert(state: &mut AppState) {
    state.ui.alert = None;
}
