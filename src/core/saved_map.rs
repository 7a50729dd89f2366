//! Gespeicherte, benannte Karten (Feld plus Metadaten).

use super::Field;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ein unter einem Namen abgelegtes Feld.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMap {
    /// Eindeutige ID (zeitstempelbasiert)
    pub id: u64,
    /// Anzeigename
    pub name: String,
    /// Freitext-Beschreibung
    #[serde(default)]
    pub description: String,
    /// Gruppe zur Sortierung in der Liste
    #[serde(default)]
    pub group: String,
    /// Das gespeicherte Feld
    pub field: Field,
    /// Zeitpunkt der Speicherung
    pub created_at: DateTime<Utc>,
}

impl SavedMap {
    /// Erstellt einen Eintrag mit aktuellem Zeitstempel.
    pub fn new(id: u64, name: &str, description: &str, group: &str, field: Field) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            group: group.trim().to_string(),
            field,
            created_at: Utc::now(),
        }
    }
}
