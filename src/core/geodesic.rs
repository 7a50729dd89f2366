//! Geodätische Grundfunktionen (Distanz, Polygonfläche) hinter einem Trait.
//!
//! Die Messlogik kennt nur den Trait. Die Standard-Implementierung nutzt
//! das `geo`-Crate.

use super::GeoPoint;
use geo::{Distance, GeodesicArea, Haversine, LineString, Point, Polygon};

/// Liefert Großkreis-Distanzen und Flächen auf der Erdoberfläche.
pub trait GeodesicProvider {
    /// Distanz zwischen zwei Punkten in Metern.
    fn distance_between(&self, a: GeoPoint, b: GeoPoint) -> f64;

    /// Fläche des (implizit geschlossenen) Polygons in Quadratmetern.
    fn polygon_area(&self, points: &[GeoPoint]) -> f64;
}

/// Haversine-Distanz und geodätische Fläche über `geo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineGeodesic;

impl HaversineGeodesic {
    /// Erstellt den Standard-Provider.
    pub fn new() -> Self {
        Self
    }
}

fn to_geo_point(p: GeoPoint) -> Point<f64> {
    Point::new(p.lng, p.lat)
}

impl GeodesicProvider for HaversineGeodesic {
    fn distance_between(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        Haversine.distance(to_geo_point(a), to_geo_point(b))
    }

    fn polygon_area(&self, points: &[GeoPoint]) -> f64 {
        if points.len() < 3 {
            return 0.0;
        }
        // Polygon::new schließt den Ring selbst
        let ring: LineString<f64> = points.iter().map(|p| (p.lng, p.lat)).collect();
        Polygon::new(ring, vec![]).geodesic_area_unsigned()
    }
}
