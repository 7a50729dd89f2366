use crate::app::collaborators::MapSurface;
use crate::core::{GeoPoint, MapCamera};

/// Freigegebene Karten-Interaktionen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapInteraction {
    /// Karte per Drag verschieben
    pub pan: bool,
    /// Zoom per Buttons / Shortcuts
    pub zoom: bool,
    /// Zoom per Mausrad
    pub scroll: bool,
}

impl Default for MapInteraction {
    fn default() -> Self {
        Self {
            pan: true,
            zoom: true,
            scroll: true,
        }
    }
}

impl MapInteraction {
    /// Gibt `true` zurück, wenn alle Interaktionen freigegeben sind.
    pub fn all_enabled(&self) -> bool {
        self.pan && self.zoom && self.scroll
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Karten-Kamera
    pub camera: MapCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Freigegebene Interaktionen (während eines Drags gesperrt)
    pub interaction: MapInteraction,
    /// Karte ist bereit (zwischen `MapLoaded` und `MapUnmounted`)
    pub map_loaded: bool,
}

impl ViewState {
    /// Erstellt den View-Zustand mit Startposition.
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            camera: MapCamera::new(center, zoom),
            viewport_size: [0.0, 0.0],
            interaction: MapInteraction::default(),
            map_loaded: false,
        }
    }
}

impl MapSurface for ViewState {
    fn set_interaction_enabled(&mut self, pan: bool, zoom: bool, scroll: bool) {
        self.interaction = MapInteraction { pan, zoom, scroll };
    }

    fn pan_to(&mut self, point: GeoPoint) {
        self.camera.look_at(point);
    }

    fn set_zoom(&mut self, level: f64) {
        self.camera.set_zoom(level);
    }
}
