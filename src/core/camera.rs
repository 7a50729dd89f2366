//! Karten-Kamera mit Web-Mercator-Projektion, Pan und Zoom.

use super::GeoPoint;
use glam::DVec2;
use std::f64::consts::PI;

/// Kamera über der Karte: Mittelpunkt in Grad, Zoom als Kachel-Zoomstufe.
#[derive(Debug, Clone, PartialEq)]
pub struct MapCamera {
    /// Kartenmittelpunkt
    pub center: GeoPoint,
    /// Zoomstufe (0 = ganze Welt in einer 256px-Kachel)
    pub zoom: f64,
}

impl MapCamera {
    /// Kantenlänge einer Kachel in Pixeln.
    pub const TILE_SIZE: f64 = 256.0;
    /// Minimale Zoomstufe.
    pub const ZOOM_MIN: f64 = 2.0;
    /// Maximale Zoomstufe.
    pub const ZOOM_MAX: f64 = 21.0;
    /// Web-Mercator ist nur bis zu dieser Breite definiert.
    pub const MAX_LATITUDE: f64 = 85.051_128_78;

    /// Erstellt eine Kamera auf `center` mit Zoomstufe `zoom`.
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Zentriert die Kamera auf einen Punkt.
    pub fn look_at(&mut self, target: GeoPoint) {
        if target.is_finite() {
            self.center = target;
        }
    }

    /// Setzt die Zoomstufe (begrenzt auf den gültigen Bereich).
    pub fn set_zoom(&mut self, level: f64) {
        if level.is_finite() {
            self.zoom = level.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        }
    }

    /// Weltgröße in Pixeln bei aktueller Zoomstufe.
    pub fn world_size(&self) -> f64 {
        Self::TILE_SIZE * 2f64.powf(self.zoom)
    }

    /// Projiziert einen Punkt auf normierte Mercator-Koordinaten (0..1, y nach unten).
    pub fn project(point: GeoPoint) -> DVec2 {
        let lat = point.lat.clamp(-Self::MAX_LATITUDE, Self::MAX_LATITUDE).to_radians();
        let x = (point.lng + 180.0) / 360.0;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0;
        DVec2::new(x, y)
    }

    /// Umkehrung von [`MapCamera::project`].
    pub fn unproject(v: DVec2) -> GeoPoint {
        let lng = v.x * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * v.y)).sinh().atan().to_degrees();
        GeoPoint::new(lat, lng)
    }

    /// Rechnet einen Punkt in Viewport-Pixel um (Ursprung oben links).
    pub fn geo_to_screen(&self, point: GeoPoint, viewport_size: DVec2) -> DVec2 {
        (Self::project(point) - Self::project(self.center)) * self.world_size()
            + viewport_size * 0.5
    }

    /// Rechnet Viewport-Pixel in einen Punkt um.
    pub fn screen_to_geo(&self, screen_pos: DVec2, viewport_size: DVec2) -> GeoPoint {
        let offset = (screen_pos - viewport_size * 0.5) / self.world_size();
        Self::unproject(Self::project(self.center) + offset)
    }

    /// Verschiebt die Karte um ein Pixel-Delta (Karte folgt dem Zeiger).
    pub fn pan_pixels(&mut self, delta_px: DVec2) {
        let center = Self::project(self.center) - delta_px / self.world_size();
        self.center = Self::unproject(center);
    }

    /// Ändert den Zoom um einen Faktor; `focus` bleibt auf dem Bildschirm fix.
    pub fn zoom_by(&mut self, factor: f64, focus: Option<GeoPoint>) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let old_size = self.world_size();
        self.set_zoom(self.zoom + factor.log2());

        if let Some(focus) = focus {
            let focus_m = Self::project(focus);
            let center_m = Self::project(self.center);
            let ratio = old_size / self.world_size();
            self.center = Self::unproject(focus_m - (focus_m - center_m) * ratio);
        }
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new(GeoPoint::default(), 3.0)
    }
}
