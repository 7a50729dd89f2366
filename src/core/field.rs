//! Feld (vom Benutzer gezeichnetes Polygon) mit abgeleiteten Messwerten.

use super::measurement::{compute_area, compute_perimeter, EdgeMeasurement};
use super::{GeoPoint, GeodesicProvider};
use serde::{Deserialize, Serialize};

/// Eindeutige, zeitstempelbasierte Feld-ID. Wird nie wiederverwendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(pub u64);

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field-{}", self.0)
    }
}

/// Adressiert ein Feld für Mutationen.
///
/// `Current` ist das Feld in Arbeit (noch nicht übernommen), unabhängig
/// von seiner ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTarget {
    /// Das aktuell gezeichnete Feld
    Current,
    /// Ein übernommenes Feld
    Committed(FieldId),
}

/// Verweis auf einen Eckpunkt eines Feldes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexRef {
    /// Feld, zu dem der Eckpunkt gehört
    pub target: FieldTarget,
    /// Position in der Punktfolge
    pub index: usize,
}

impl VertexRef {
    /// Erstellt einen Eckpunkt-Verweis.
    pub fn new(target: FieldTarget, index: usize) -> Self {
        Self { target, index }
    }
}

/// Ein Feld: geschlossenes Polygon plus abgeleitete Werte.
///
/// `area`, `perimeter` und `measurements` werden ausschließlich über
/// [`Field::recompute`] gesetzt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Eindeutige ID
    pub id: FieldId,
    /// Eckpunkte in Umlaufreihenfolge (letzter Punkt schließt zum ersten)
    pub points: Vec<GeoPoint>,
    /// Fläche in Hektar
    #[serde(default)]
    pub area: f64,
    /// Umfang in Metern
    #[serde(default)]
    pub perimeter: f64,
    /// Eine Messung pro Kante `i -> (i + 1) % n`
    #[serde(default)]
    pub measurements: Vec<EdgeMeasurement>,
}

impl Field {
    /// Erstellt ein leeres Feld.
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            points: Vec::new(),
            area: 0.0,
            perimeter: 0.0,
            measurements: Vec::new(),
        }
    }

    /// Erstellt ein Feld aus Punkten und berechnet die Messwerte.
    pub fn with_points(id: FieldId, points: Vec<GeoPoint>, geo: &dyn GeodesicProvider) -> Self {
        let mut field = Self::new(id);
        field.points = points;
        field.recompute(geo);
        field
    }

    /// Berechnet Fläche, Umfang und Kantenlängen neu.
    pub fn recompute(&mut self, geo: &dyn GeodesicProvider) {
        let perimeter = compute_perimeter(geo, &self.points);
        self.area = compute_area(geo, &self.points);
        self.perimeter = perimeter.total_distance;
        self.measurements = perimeter.measurements;
    }

    /// Anzahl der Eckpunkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Fläche und Umfang sind erst ab 3 Punkten aussagekräftig.
    pub fn has_area(&self) -> bool {
        self.points.len() >= 3
    }

    /// Anzahl der anzuzeigenden Kanten (offene Linie aus 2 Punkten: eine).
    pub fn visible_edge_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            2 => 1,
            n => n,
        }
    }

    /// Start- und Endpunkt der Kante `edge_index`.
    pub fn edge(&self, edge_index: usize) -> Option<(GeoPoint, GeoPoint)> {
        let n = self.points.len();
        if n < 2 || edge_index >= n {
            return None;
        }
        Some((self.points[edge_index], self.points[(edge_index + 1) % n]))
    }
}

/// Vergibt monoton steigende, zeitstempelbasierte Feld-IDs.
#[derive(Debug, Clone, Default)]
pub struct FieldIdGenerator {
    last: u64,
}

impl FieldIdGenerator {
    /// Erstellt einen Generator ohne bekannte IDs.
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Merkt sich eine bereits vergebene ID (z.B. nach dem Laden).
    pub fn observe(&mut self, id: FieldId) {
        self.last = self.last.max(id.0);
    }

    /// Nächste ID: aktuelle Zeit in Millisekunden, mindestens `letzte + 1`.
    ///
    /// `None`, wenn bereits `u64::MAX` vergeben wurde.
    pub fn next_id(&mut self) -> Option<FieldId> {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.last.checked_add(1)?);
        self.last = id;
        Some(FieldId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HaversineGeodesic;

    #[test]
    fn generator_never_repeats() {
        let mut ids = FieldIdGenerator::new();
        let a = ids.next_id().unwrap();
        let b = ids.next_id().unwrap();
        let c = ids.next_id().unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn generator_skips_observed_ids() {
        let mut ids = FieldIdGenerator::new();
        let far_future = FieldId(u64::MAX / 2);
        ids.observe(far_future);
        assert_eq!(ids.next_id(), Some(FieldId(u64::MAX / 2 + 1)));
    }

    #[test]
    fn generator_reports_exhaustion_instead_of_overflowing() {
        let mut ids = FieldIdGenerator::new();
        ids.observe(FieldId(u64::MAX));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn recompute_keeps_measurement_invariant() {
        let geo = HaversineGeodesic::new();
        let field = Field::with_points(
            FieldId(1),
            vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, 0.001),
                GeoPoint::new(0.001, 0.001),
            ],
            &geo,
        );
        assert_eq!(field.measurements.len(), field.points.len());
        assert!(field.area > 0.0);
        let sum: f64 = field.measurements.iter().map(|m| m.length).sum();
        assert!((sum - field.perimeter).abs() < 1e-9);
    }

    #[test]
    fn edge_wraps_around() {
        let geo = HaversineGeodesic::new();
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let c = GeoPoint::new(1.0, 1.0);
        let field = Field::with_points(FieldId(7), vec![a, b, c], &geo);
        assert_eq!(field.edge(2), Some((c, a)));
        assert_eq!(field.edge(3), None);
    }

    #[test]
    fn field_id_displays_with_prefix() {
        assert_eq!(FieldId(42).to_string(), "field-42");
    }
}
