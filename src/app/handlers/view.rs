//! Handler für Kamera, Viewport und Karten-Lebenszyklus.

use crate::app::AppState;
use crate::core::GeoPoint;

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    if state.view.interaction.zoom {
        let step = state.options.camera_zoom_step;
        state.view.camera.zoom_by(step, None);
    }
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    if state.view.interaction.zoom {
        let step = state.options.camera_zoom_step;
        state.view.camera.zoom_by(1.0 / step, None);
    }
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Kamera um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: glam::DVec2) {
    if state.view.interaction.pan {
        state.view.camera.pan_pixels(delta);
    }
}

/// Zoomt per Mausrad mit optionalem Fokuspunkt.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus: Option<GeoPoint>) {
    if state.view.interaction.scroll {
        state.view.camera.zoom_by(factor, focus);
    }
}

/// Markiert die Karte als bereit.
pub fn map_loaded(state: &mut AppState) {
    state.view.map_loaded = true;
    log::info!("Karte geladen");
}

/// Karte entfernt: laufenden Drag verwerfen, Interaktion freigeben.
pub fn map_unmounted(state: &mut AppState) {
    state.session.reset(&mut state.view);
    state.view.map_loaded = false;
    log::info!("Karte entfernt");
}
