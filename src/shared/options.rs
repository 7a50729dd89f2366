//! Zentrale Konfiguration für den Field Mapper.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::GeoPoint;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl an Undo-Schritten.
pub const HISTORY_DEPTH: usize = 200;

// ── Messung ─────────────────────────────────────────────────────────

/// Verzögerung der Neuberechnung des aktuellen Feldes nach einem Klick.
pub const MEASUREMENT_DEBOUNCE_MS: u64 = 100;

// ── Standort ────────────────────────────────────────────────────────

/// Zeitlimit für eine Standortabfrage.
pub const GEOLOCATION_TIMEOUT_MS: u64 = 10_000;
/// Zoomstufe nach erfolgreicher Standortabfrage.
pub const LOCATE_ZOOM: f64 = 17.0;

// ── Kamera ──────────────────────────────────────────────────────────

/// Start-Zoomstufe der Karte.
pub const DEFAULT_ZOOM: f64 = 3.0;
/// Zoom-Faktor bei Menü-Buttons / Shortcuts.
pub const CAMERA_ZOOM_STEP: f64 = 2.0;
/// Zoom-Faktor pro Mausrad-Raste.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.2;

// ── Eckpunkte ───────────────────────────────────────────────────────

/// Pick-Radius für Eckpunkte und Mittelpunkt-Griffe in Screen-Pixeln.
pub const VERTEX_PICK_RADIUS_PX: f32 = 10.0;
/// Darstellungsradius eines Eckpunkts.
pub const VERTEX_RADIUS_PX: f32 = 6.0;
/// Darstellungsradius eines Mittelpunkt-Griffs.
pub const MIDPOINT_RADIUS_PX: f32 = 4.0;
/// Standard-Farbe der Eckpunkte (RGBA: Weiß).
pub const VERTEX_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe des selektierten Eckpunkts (RGBA: Magenta).
pub const VERTEX_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe des Eckpunkts unter dem Zeiger (RGBA: Gelb).
pub const VERTEX_COLOR_HOVERED: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Farbe der Mittelpunkt-Griffe (RGBA: halbtransparentes Weiß).
pub const MIDPOINT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.5];

// ── Felder ──────────────────────────────────────────────────────────

/// Linienstärke der Feldränder in Pixeln.
pub const FIELD_STROKE_WIDTH_PX: f32 = 2.0;
/// Randfarbe übernommener Felder (RGBA: Grün).
pub const FIELD_STROKE_COLOR: [f32; 4] = [0.2, 0.9, 0.2, 1.0];
/// Füllfarbe übernommener Felder.
pub const FIELD_FILL_COLOR: [f32; 4] = [0.2, 0.9, 0.2, 0.25];
/// Randfarbe des Feldes in Arbeit (RGBA: Orange).
pub const CURRENT_FIELD_STROKE_COLOR: [f32; 4] = [1.0, 0.5, 0.1, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `field_mapper.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Editing ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    pub history_depth: usize,
    /// Debounce der Neuberechnung beim Zeichnen (Millisekunden)
    pub measurement_debounce_ms: u64,

    // ── Standort ────────────────────────────────────────────────
    /// Zeitlimit der Standortabfrage (Millisekunden)
    pub geolocation_timeout_ms: u64,
    /// Hohe Genauigkeit anfordern
    pub geolocation_high_accuracy: bool,
    /// Zoomstufe nach erfolgreicher Standortabfrage
    pub locate_zoom: f64,
    /// Fester Standort für Desktop-Systeme ohne Ortungsdienst
    pub home_position: Option<GeoPoint>,

    // ── Kamera ──────────────────────────────────────────────────
    /// Kartenmittelpunkt beim Start
    pub default_center: GeoPoint,
    /// Zoomstufe beim Start
    pub default_zoom: f64,
    /// Zoom-Faktor bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Faktor pro Mausrad-Raste
    pub camera_scroll_zoom_step: f64,

    // ── Eckpunkte ───────────────────────────────────────────────
    /// Pick-Radius in Screen-Pixeln
    pub vertex_pick_radius_px: f32,
    /// Darstellungsradius eines Eckpunkts
    pub vertex_radius_px: f32,
    /// Darstellungsradius eines Mittelpunkt-Griffs
    pub midpoint_radius_px: f32,
    /// Standard-Farbe der Eckpunkte
    pub vertex_color: [f32; 4],
    /// Farbe des selektierten Eckpunkts
    pub vertex_color_selected: [f32; 4],
    /// Farbe des Eckpunkts unter dem Zeiger
    pub vertex_color_hovered: [f32; 4],
    /// Farbe der Mittelpunkt-Griffe
    pub midpoint_color: [f32; 4],

    // ── Felder ──────────────────────────────────────────────────
    /// Linienstärke der Feldränder
    pub field_stroke_width_px: f32,
    /// Randfarbe übernommener Felder
    pub field_stroke_color: [f32; 4],
    /// Füllfarbe übernommener Felder
    pub field_fill_color: [f32; 4],
    /// Randfarbe des Feldes in Arbeit
    pub current_field_stroke_color: [f32; 4],
    /// Kantenlängen an den Kanten beschriften
    pub show_edge_labels: bool,

    // ── Speicher ────────────────────────────────────────────────
    /// Dateiname des lokalen Speichers (neben der Binary)
    pub storage_file: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_depth: HISTORY_DEPTH,
            measurement_debounce_ms: MEASUREMENT_DEBOUNCE_MS,

            geolocation_timeout_ms: GEOLOCATION_TIMEOUT_MS,
            geolocation_high_accuracy: true,
            locate_zoom: LOCATE_ZOOM,
            home_position: None,

            default_center: GeoPoint::default(),
            default_zoom: DEFAULT_ZOOM,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            vertex_pick_radius_px: VERTEX_PICK_RADIUS_PX,
            vertex_radius_px: VERTEX_RADIUS_PX,
            midpoint_radius_px: MIDPOINT_RADIUS_PX,
            vertex_color: VERTEX_COLOR,
            vertex_color_selected: VERTEX_COLOR_SELECTED,
            vertex_color_hovered: VERTEX_COLOR_HOVERED,
            midpoint_color: MIDPOINT_COLOR,

            field_stroke_width_px: FIELD_STROKE_WIDTH_PX,
            field_stroke_color: FIELD_STROKE_COLOR,
            field_fill_color: FIELD_FILL_COLOR,
            current_field_stroke_color: CURRENT_FIELD_STROKE_COLOR,
            show_edge_labels: true,

            storage_file: "field_mapper_data.json".to_string(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        Self::beside_binary("field_mapper.toml")
    }

    /// Ermittelt den Pfad der Speicherdatei neben der Binary.
    pub fn storage_path(&self) -> std::path::PathBuf {
        Self::beside_binary(&self.storage_file)
    }

    fn beside_binary(file_name: &str) -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("field-mapper"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(file_name)
    }

    /// Debounce-Dauer der Messwert-Neuberechnung.
    pub fn measurement_debounce(&self) -> Duration {
        Duration::from_millis(self.measurement_debounce_ms)
    }

    /// Zeitlimit der Standortabfrage.
    pub fn geolocation_timeout(&self) -> Duration {
        Duration::from_millis(self.geolocation_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_values() {
        let options = EditorOptions {
            history_depth: 42,
            home_position: Some(GeoPoint::new(52.5, 13.4)),
            ..EditorOptions::default()
        };
        let content = toml::to_string_pretty(&options).unwrap();
        let back: EditorOptions = toml::from_str(&content).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let back: EditorOptions = toml::from_str("history_depth = 7\n").unwrap();
        assert_eq!(back.history_depth, 7);
        assert_eq!(back.measurement_debounce_ms, MEASUREMENT_DEBOUNCE_MS);
        assert_eq!(back.home_position, None);
    }

    #[test]
    fn unreadable_file_yields_defaults() {
        let path = std::env::temp_dir().join("field_mapper_does_not_exist.toml");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }
}
