//! Gespeicherte, benannte Karten unter einem eigenen Schlüssel.

use super::KeyValueStore;
use crate::core::{GeodesicProvider, SavedMap};

/// Schlüssel der gespeicherten Karten im Key-Value-Speicher.
pub const SAVED_MAPS_STORAGE_KEY: &str = "field_mapper.saved_maps";

/// Lädt alle gespeicherten Karten. Fehler: leere Liste.
pub fn load_saved_maps(store: &dyn KeyValueStore, geo: &dyn GeodesicProvider) -> Vec<SavedMap> {
    let content = match store.get(SAVED_MAPS_STORAGE_KEY) {
        Ok(Some(content)) => content,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Gespeicherte Karten nicht lesbar: {:#}", e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<SavedMap>>(&content) {
        Ok(mut maps) => {
            for map in &mut maps {
                map.field.points.retain(|p| p.is_finite());
                map.field.recompute(geo);
            }
            log::info!("{} gespeicherte Karten geladen", maps.len());
            maps
        }
        Err(e) => {
            log::warn!("Gespeicherte Karten fehlerhaft: {}", e);
            Vec::new()
        }
    }
}

/// Schreibt die komplette Liste der gespeicherten Karten.
pub fn write_saved_maps(store: &mut dyn KeyValueStore, maps: &[SavedMap]) -> anyhow::Result<()> {
    let json = serde_json::to_string(maps)?;
    store.set(SAVED_MAPS_STORAGE_KEY, json)
}

/// Nächste freie ID: aktuelle Zeit in Millisekunden, mindestens `max + 1`.
///
/// Ist `u64::MAX` bereits vergeben, wird die kleinste freie ID genommen.
pub fn next_saved_map_id(maps: &[SavedMap]) -> u64 {
    let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let highest = maps.iter().map(|m| m.id).max().unwrap_or(0);
    match highest.checked_add(1) {
        Some(next) => now.max(next),
        None => {
            let id = (1..u64::MAX)
                .find(|id| maps.iter().all(|m| m.id != *id))
                .unwrap_or(0);
            log::warn!("IDs gespeicherter Karten erschöpft, verwende freie ID {}", id);
            id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, FieldId, GeoPoint, HaversineGeodesic};
    use crate::storage::MemoryStore;

    fn sample_map(id: u64) -> SavedMap {
        let geo = HaversineGeodesic::new();
        let field = Field::with_points(
            FieldId(3),
            vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, 0.001),
                GeoPoint::new(0.001, 0.0),
            ],
            &geo,
        );
        SavedMap::new(id, "  Nordacker ", "Winterweizen", "Hof", field)
    }

    #[test]
    fn saved_maps_survive_write_and_load() {
        let geo = HaversineGeodesic::new();
        let mut store = MemoryStore::new();
        let maps = vec![sample_map(1), sample_map(2)];

        write_saved_maps(&mut store, &maps).unwrap();
        let loaded = load_saved_maps(&store, &geo);

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Nordacker");
        assert_eq!(loaded[1].field.points, maps[1].field.points);
        assert_eq!(loaded[0].created_at, maps[0].created_at);
    }

    #[test]
    fn next_id_exceeds_existing_ids() {
        let maps = vec![sample_map(u64::MAX / 2)];
        assert_eq!(next_saved_map_id(&maps), u64::MAX / 2 + 1);
    }

    #[test]
    fn next_id_after_highest_possible_id_takes_free_id() {
        let maps = vec![sample_map(u64::MAX), sample_map(1)];
        assert_eq!(next_saved_map_id(&maps), 2);
    }
}
