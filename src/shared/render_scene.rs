//! Feld-Szene als expliziter Übergabevertrag zwischen App und Kartenansicht.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{
    EdgeMeasurement, FieldId, FieldTarget, GeoPoint, MapCamera, SavedMap, VertexRef,
};

/// Darstellung eines einzelnen Feldes in einem Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    /// Adresse für Intents
    pub target: FieldTarget,
    /// Feld-ID
    pub id: FieldId,
    /// Anzuzeigende Punkte (Entwurf während eines Drags)
    pub points: Vec<GeoPoint>,
    /// Fläche in Hektar
    pub area: f64,
    /// Umfang in Metern
    pub perimeter: f64,
    /// Kantenlängen passend zu `points` (kann beim Zeichnen nachlaufen)
    pub measurements: Vec<EdgeMeasurement>,
    /// Feld in Arbeit
    pub is_current: bool,
    /// Punkte stammen aus einem laufenden Drag
    pub is_draft: bool,
}

impl FieldShape {
    /// Fläche und Umfang sind erst ab 3 Punkten aussagekräftig.
    pub fn has_area(&self) -> bool {
        self.points.len() >= 3
    }

    /// Anzahl der anzuzeigenden Kanten.
    ///
    /// Eine offene Linie aus 2 Punkten zeigt nur die Kante 0.
    pub fn visible_edge_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            2 => 1,
            n => n,
        }
    }
}

/// Read-only Daten für einen Frame der Kartenansicht.
#[derive(Debug, Clone)]
pub struct FieldScene {
    /// Übernommene Felder in Einfügereihenfolge, das aktuelle Feld zuletzt
    pub fields: Vec<FieldShape>,
    /// Kamera-Zustand für diesen Frame
    pub camera: MapCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Ausgewählter Eckpunkt
    pub selected: Option<VertexRef>,
    /// Eckpunkt unter dem Zeiger
    pub hovered: Option<VertexRef>,
    /// Ein Drag läuft
    pub dragging: bool,
    /// Zeichenmodus aktiv
    pub drawing: bool,
    /// Ein Feld ist in Arbeit
    pub has_current: bool,
    /// Undo verfügbar
    pub can_undo: bool,
    /// Redo verfügbar
    pub can_redo: bool,
    /// Standortabfrage läuft
    pub locating: bool,
    /// Karte darf verschoben werden
    pub pan_enabled: bool,
    /// Karte darf per Mausrad gezoomt werden
    pub scroll_zoom_enabled: bool,
    /// Sichtbare Meldung
    pub alert: Option<String>,
    /// Gespeicherte Karten
    pub saved_maps: Vec<SavedMap>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl FieldScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Feld zu einem Ziel.
    pub fn shape(&self, target: FieldTarget) -> Option<&FieldShape> {
        self.fields.iter().find(|f| f.target == target)
    }
}
