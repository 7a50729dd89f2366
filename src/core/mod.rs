//! Core-Domänentypen: Punkte, Felder, Messfunktionen, Kamera.

pub mod camera;
pub mod field;
pub mod geodesic;
/// Messfunktionen für Felder
///
/// Fläche (Hektar), Umfang und Kantenlängen (Meter), Mittelpunkt,
/// Längenformatierung und Anpassung einer Kantenlänge.
pub mod measurement;
pub mod point;
pub mod saved_map;

pub use camera::MapCamera;
pub use field::{Field, FieldId, FieldIdGenerator, FieldTarget, VertexRef};
pub use geodesic::{GeodesicProvider, HaversineGeodesic};
pub use measurement::{
    adjust_line_length, compute_area, compute_perimeter, format_area, format_length, midpoint,
    EdgeMeasurement, Perimeter,
};
pub use point::GeoPoint;
pub use saved_map::SavedMap;
