//! Lokale Persistenz: Key-Value-Speicher, Feldsammlung, gespeicherte Karten.

pub mod fields;
pub mod kv_store;
pub mod saved_maps;

pub use fields::{
    clear_fields, load_fields, parse_fields, save_fields, serialize_fields, FIELDS_STORAGE_KEY,
};
pub use kv_store::{FileStore, KeyValueStore, MemoryStore};
pub use saved_maps::{
    load_saved_maps, next_saved_map_id, write_saved_maps, SAVED_MAPS_STORAGE_KEY,
};
