//! Geografischer Punkt (WGS84, Grad).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ein Punkt auf der Erdoberfläche in Grad (ohne Höhe).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Einzige Validierung: beide Koordinaten müssen endlich sein.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Vektor-Darstellung mit `x = lng`, `y = lat`.
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }

    /// Gegenstück zu [`GeoPoint::to_dvec2`].
    pub fn from_dvec2(v: DVec2) -> Self {
        Self { lat: v.y, lng: v.x }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
