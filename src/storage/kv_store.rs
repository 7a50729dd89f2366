//! Lokaler Key-Value-Speicher (Trait + Implementierungen).

use anyhow::Context;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Minimaler String-Speicher mit festen Schlüsseln.
pub trait KeyValueStore {
    /// Liest den Wert zu `key` (`None` = nicht vorhanden).
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Schreibt `value` unter `key`.
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()>;

    /// Entfernt `key` (fehlender Schlüssel ist kein Fehler).
    fn remove(&mut self, key: &str) -> anyhow::Result<()>;
}

/// Flüchtiger Speicher im Arbeitsspeicher.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Speicher als JSON-Objekt in einer Datei.
///
/// Der Inhalt wird beim Öffnen gelesen und bei jeder Änderung komplett
/// zurückgeschrieben.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Öffnet die Datei. Fehlende oder defekte Datei: leerer Speicher.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => {
                    log::info!("Speicher geladen aus: {}", path.display());
                    entries
                }
                Err(e) => {
                    log::warn!(
                        "Speicherdatei {} fehlerhaft, starte leer: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(_) => {
                log::info!("Keine Speicherdatei gefunden: {}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn flush(&self) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Speicherdatei {} nicht schreibbar", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
