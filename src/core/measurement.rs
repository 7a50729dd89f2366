//! Messfunktionen für Felder: Fläche, Umfang, Kantenlängen, Kantenanpassung.
//!
//! Alle Funktionen sind zustandslos; die eigentliche Geodäsie liefert ein
//! injizierter [`GeodesicProvider`].

use super::{GeoPoint, GeodesicProvider};
use serde::{Deserialize, Serialize};

/// Quadratmeter pro Hektar.
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Kanten unterhalb dieser Länge (Meter) gelten als degeneriert.
const LENGTH_EPSILON: f64 = 1e-9;

/// Anzahl der Korrekturschritte in [`adjust_line_length`].
const ADJUST_ITERATIONS: usize = 4;

/// Messwert einer Kante `i -> (i + 1) % n`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeMeasurement {
    /// Kantenlänge in Metern
    pub length: f64,
    /// Reserviert, immer 0
    #[serde(default)]
    pub width: f64,
}

impl EdgeMeasurement {
    /// Erstellt einen Messwert mit reservierter Breite 0.
    pub fn new(length: f64) -> Self {
        Self { length, width: 0.0 }
    }
}

/// Ergebnis von [`compute_perimeter`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Perimeter {
    /// Summe aller Kantenlängen in Metern
    pub total_distance: f64,
    /// Ein Eintrag pro Kante, gleiche Reihenfolge wie die Punkte
    pub measurements: Vec<EdgeMeasurement>,
}

/// Fläche in Hektar; 0 bei weniger als 3 Punkten.
///
/// Selbstüberschneidende Polygone werden nicht erkannt, das Ergebnis ist
/// dann das, was die Flächenformel des Providers liefert.
pub fn compute_area(geo: &dyn GeodesicProvider, points: &[GeoPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    geo.polygon_area(points) / SQUARE_METERS_PER_HECTARE
}

/// Umfang und Kantenlängen des implizit geschlossenen Polygons.
///
/// Liefert `(0, [])` bei weniger als 2 Punkten. Bei genau 2 Punkten entstehen
/// zwei Einträge (Hin- und Rückkante).
pub fn compute_perimeter(geo: &dyn GeodesicProvider, points: &[GeoPoint]) -> Perimeter {
    let n = points.len();
    if n < 2 {
        return Perimeter::default();
    }

    let measurements: Vec<EdgeMeasurement> = (0..n)
        .map(|i| EdgeMeasurement::new(geo.distance_between(points[i], points[(i + 1) % n])))
        .collect();
    let total_distance = measurements.iter().map(|m| m.length).sum();

    Perimeter {
        total_distance,
        measurements,
    }
}

/// Arithmetisches Mittel von Breite und Länge.
///
/// Nicht geodätisch korrekt, reicht aber für die Position des
/// Einfüge-Griffs auf einer Kante.
pub fn midpoint(a: GeoPoint, b: GeoPoint) -> GeoPoint {
    GeoPoint::new((a.lat + b.lat) / 2.0, (a.lng + b.lng) / 2.0)
}

/// Formatiert eine Länge: unter 1000 m in Metern, sonst in Kilometern.
pub fn format_length(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{:.1} m", meters)
    } else {
        format!("{:.2} km", meters / 1000.0)
    }
}

/// Formatiert eine Fläche in Hektar.
pub fn format_area(hectares: f64) -> String {
    format!("{:.2} ha", hectares)
}

/// Verschiebt den Endpunkt der Kante `edge_index` entlang der Kantenrichtung,
/// sodass die geodätische Länge `new_length` Meter beträgt.
///
/// Alle anderen Punkte bleiben unverändert. Bei ungültiger Eingabe
/// (Index außerhalb, Kante der Länge 0, nicht-endliche oder negative Länge)
/// wird die Eingabe unverändert zurückgegeben.
pub fn adjust_line_length(
    geo: &dyn GeodesicProvider,
    points: &[GeoPoint],
    edge_index: usize,
    new_length: f64,
) -> Vec<GeoPoint> {
    let n = points.len();
    if n < 2 || edge_index >= n || !new_length.is_finite() || new_length < 0.0 {
        return points.to_vec();
    }

    let end_index = (edge_index + 1) % n;
    let start = points[edge_index];
    let end = points[end_index];

    let current = geo.distance_between(start, end);
    if !current.is_finite() || current <= LENGTH_EPSILON {
        log::debug!("Kante {} hat Länge 0, keine Anpassung", edge_index);
        return points.to_vec();
    }

    // Lat/Lng ist nicht metrisch: Skalierung iterativ nachkorrigieren
    let origin = start.to_dvec2();
    let direction = end.to_dvec2() - origin;
    let mut scale = new_length / current;
    for _ in 0..ADJUST_ITERATIONS {
        let candidate = GeoPoint::from_dvec2(origin + direction * scale);
        let measured = geo.distance_between(start, candidate);
        if measured <= LENGTH_EPSILON {
            break;
        }
        let correction = new_length / measured;
        if (correction - 1.0).abs() < 1e-12 {
            break;
        }
        scale *= correction;
    }

    let adjusted = GeoPoint::from_dvec2(origin + direction * scale);
    if !adjusted.is_finite() {
        return points.to_vec();
    }

    let mut result = points.to_vec();
    result[end_index] = adjusted;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HaversineGeodesic;
    use approx::assert_relative_eq;

    /// Grad pro Meter entlang eines Meridians (Haversine-Erdradius).
    fn degrees_for(meters: f64) -> f64 {
        (meters / 6_371_008.8).to_degrees()
    }

    fn square_100m() -> Vec<GeoPoint> {
        let d = degrees_for(100.0);
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, d),
            GeoPoint::new(d, d),
            GeoPoint::new(d, 0.0),
        ]
    }

    #[test]
    fn area_is_zero_below_three_points() {
        let geo = HaversineGeodesic::new();
        assert_eq!(compute_area(&geo, &[]), 0.0);
        assert_eq!(compute_area(&geo, &[GeoPoint::new(1.0, 1.0)]), 0.0);
        assert_eq!(
            compute_area(&geo, &[GeoPoint::new(1.0, 1.0), GeoPoint::new(1.0, 1.1)]),
            0.0
        );
    }

    #[test]
    fn perimeter_is_empty_below_two_points() {
        let geo = HaversineGeodesic::new();
        assert_eq!(compute_perimeter(&geo, &[]), Perimeter::default());
        assert_eq!(
            compute_perimeter(&geo, &[GeoPoint::new(3.0, 4.0)]),
            Perimeter::default()
        );
    }

    #[test]
    fn square_of_100m_is_one_hectare() {
        let geo = HaversineGeodesic::new();
        let square = square_100m();

        assert_relative_eq!(compute_area(&geo, &square), 1.0, epsilon = 0.02);

        let perimeter = compute_perimeter(&geo, &square);
        assert_relative_eq!(perimeter.total_distance, 400.0, epsilon = 1.0);
        assert_eq!(perimeter.measurements.len(), 4);
        for m in &perimeter.measurements {
            assert_relative_eq!(m.length, 100.0, epsilon = 0.5);
            assert_eq!(m.width, 0.0);
        }
    }

    #[test]
    fn two_points_yield_two_edges() {
        let geo = HaversineGeodesic::new();
        let line = [GeoPoint::new(0.0, 0.0), GeoPoint::new(degrees_for(50.0), 0.0)];
        let perimeter = compute_perimeter(&geo, &line);
        assert_eq!(perimeter.measurements.len(), 2);
        assert_relative_eq!(perimeter.measurements[0].length, 50.0, epsilon = 1e-3);
        assert_relative_eq!(perimeter.total_distance, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn midpoint_is_arithmetic_mean() {
        let m = midpoint(GeoPoint::new(10.0, 20.0), GeoPoint::new(12.0, 26.0));
        assert_eq!(m, GeoPoint::new(11.0, 23.0));
    }

    #[test]
    fn format_length_switches_to_km() {
        assert_eq!(format_length(0.0), "0.0 m");
        assert_eq!(format_length(999.94), "999.9 m");
        assert_eq!(format_length(1000.0), "1.00 km");
        assert_eq!(format_length(12_500.0), "12.50 km");
        assert_eq!(format_area(1.234), "1.23 ha");
    }

    #[test]
    fn adjust_line_length_hits_target_and_keeps_other_points() {
        let geo = HaversineGeodesic::new();
        let square = square_100m();

        let adjusted = adjust_line_length(&geo, &square, 1, 150.0);

        assert_relative_eq!(
            geo.distance_between(adjusted[1], adjusted[2]),
            150.0,
            epsilon = 1e-3
        );
        assert_eq!(adjusted[0], square[0]);
        assert_eq!(adjusted[1], square[1]);
        assert_eq!(adjusted[3], square[3]);
        assert_ne!(adjusted[2], square[2]);
    }

    #[test]
    fn adjust_last_edge_moves_first_point() {
        let geo = HaversineGeodesic::new();
        let square = square_100m();

        let adjusted = adjust_line_length(&geo, &square, 3, 80.0);

        assert_relative_eq!(
            geo.distance_between(adjusted[3], adjusted[0]),
            80.0,
            epsilon = 1e-3
        );
        assert_eq!(&adjusted[1..], &square[1..]);
    }

    #[test]
    fn adjust_zero_length_edge_is_noop() {
        let geo = HaversineGeodesic::new();
        let p = GeoPoint::new(1.0, 1.0);
        let points = vec![p, p, GeoPoint::new(1.001, 1.0)];

        let adjusted = adjust_line_length(&geo, &points, 0, 25.0);

        assert_eq!(adjusted, points);
        assert!(adjusted.iter().all(GeoPoint::is_finite));
    }

    #[test]
    fn adjust_rejects_invalid_input() {
        let geo = HaversineGeodesic::new();
        let square = square_100m();
        assert_eq!(adjust_line_length(&geo, &square, 4, 10.0), square);
        assert_eq!(adjust_line_length(&geo, &square, 0, f64::NAN), square);
        assert_eq!(adjust_line_length(&geo, &square, 0, -1.0), square);
        assert_eq!(adjust_line_length(&geo, &square[..1], 0, 10.0), &square[..1]);
    }
}
