//! Persistenz der übernommenen Felder unter einem festen Schlüssel.

use super::KeyValueStore;
use crate::core::{Field, GeodesicProvider};

/// Schlüssel der Feldsammlung im Key-Value-Speicher.
pub const FIELDS_STORAGE_KEY: &str = "field_mapper.fields";

/// Serialisiert die Feldsammlung als JSON-Array.
pub fn serialize_fields<'a>(
    fields: impl IntoIterator<Item = &'a Field>,
) -> anyhow::Result<String> {
    let fields: Vec<&Field> = fields.into_iter().collect();
    Ok(serde_json::to_string(&fields)?)
}

/// Liest eine Feldsammlung aus JSON.
///
/// Abgeleitete Werte werden nicht übernommen, sondern neu berechnet.
/// Punkte mit nicht-endlichen Koordinaten werden verworfen.
pub fn parse_fields(json: &str, geo: &dyn GeodesicProvider) -> anyhow::Result<Vec<Field>> {
    let mut fields: Vec<Field> = serde_json::from_str(json)?;
    for field in &mut fields {
        field.points.retain(|p| p.is_finite());
        field.recompute(geo);
    }
    Ok(fields)
}

/// Lädt die gespeicherten Felder. Lese- oder Parse-Fehler: leere Liste.
pub fn load_fields(store: &dyn KeyValueStore, geo: &dyn GeodesicProvider) -> Vec<Field> {
    let content = match store.get(FIELDS_STORAGE_KEY) {
        Ok(Some(content)) => content,
        Ok(None) => {
            log::info!("Keine gespeicherten Felder gefunden");
            return Vec::new();
        }
        Err(e) => {
            log::warn!("Gespeicherte Felder nicht lesbar: {:#}", e);
            return Vec::new();
        }
    };

    match parse_fields(&content, geo) {
        Ok(fields) => {
            log::info!("{} gespeicherte Felder geladen", fields.len());
            fields
        }
        Err(e) => {
            log::warn!("Gespeicherte Felder fehlerhaft, starte leer: {:#}", e);
            Vec::new()
        }
    }
}

/// Schreibt die komplette Feldsammlung.
pub fn save_fields<'a>(
    store: &mut dyn KeyValueStore,
    fields: impl IntoIterator<Item = &'a Field>,
) -> anyhow::Result<()> {
    let json = serialize_fields(fields)?;
    store.set(FIELDS_STORAGE_KEY, json)
}

/// Entfernt die gespeicherte Feldsammlung.
pub fn clear_fields(store: &mut dyn KeyValueStore) -> anyhow::Result<()> {
    store.remove(FIELDS_STORAGE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldId, GeoPoint, HaversineGeodesic};
    use crate::storage::MemoryStore;

    #[test]
    fn stored_derived_values_are_recomputed() {
        let geo = HaversineGeodesic::new();
        let json = r#"[{"id":5,"points":[{"lat":0.0,"lng":0.0},{"lat":0.0,"lng":0.001},{"lat":0.001,"lng":0.001}],"area":999.0,"perimeter":-1.0,"measurements":[]}]"#;

        let fields = parse_fields(json, &geo).unwrap();

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].id, FieldId(5));
        assert!(fields[0].area > 0.0 && fields[0].area < 1.0);
        assert!(fields[0].perimeter > 0.0);
        assert_eq!(fields[0].measurements.len(), 3);
    }

    #[test]
    fn missing_derived_values_are_accepted() {
        let geo = HaversineGeodesic::new();
        let json = r#"[{"id":1,"points":[{"lat":1.0,"lng":2.0}]}]"#;
        let fields = parse_fields(json, &geo).unwrap();
        assert_eq!(fields[0].points, vec![GeoPoint::new(1.0, 2.0)]);
        assert!(fields[0].measurements.is_empty());
    }

    #[test]
    fn corrupt_storage_loads_as_empty() {
        let geo = HaversineGeodesic::new();
        let mut store = MemoryStore::new();
        store
            .set(FIELDS_STORAGE_KEY, "{not json".to_string())
            .unwrap();
        assert!(load_fields(&store, &geo).is_empty());
    }

    #[test]
    fn clear_removes_key() {
        let geo = HaversineGeodesic::new();
        let mut store = MemoryStore::new();
        let field = Field::with_points(FieldId(1), vec![GeoPoint::new(0.0, 0.0)], &geo);
        save_fields(&mut store, [&field]).unwrap();
        assert_eq!(load_fields(&store, &geo).len(), 1);

        clear_fields(&mut store).unwrap();
        assert_eq!(store.get(FIELDS_STORAGE_KEY).unwrap(), None);
    }
}
