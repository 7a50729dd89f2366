use super::super::state::EditorMode;
use crate::core::{FieldId, FieldTarget, GeoPoint, VertexRef};
use std::time::Instant;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Felder ===
    /// Neues aktuelles Feld anlegen
    CreateField,
    /// Punkt an das aktuelle Feld anhängen
    AppendPoint { point: GeoPoint },
    /// Aktuelles Feld übernehmen
    FinalizeField,
    /// Feld löschen
    DeleteField { id: FieldId },
    /// Alle Felder und den Speicherschlüssel löschen
    ClearAll,
    /// Editor-Modus setzen
    SetEditorMode { mode: EditorMode },
    /// Kante auf neue Länge setzen
    SetEdgeLength {
        target: FieldTarget,
        edge_index: usize,
        length: f64,
    },

    // === Eckpunkte ===
    /// Eckpunkt auswählen
    SelectVertex { vertex: VertexRef },
    /// Auswahl aufheben
    ClearSelection,
    /// Hover-Seitenkanal setzen
    SetHoveredVertex { vertex: Option<VertexRef> },
    /// Drag eines Eckpunkts starten
    StartVertexMove { vertex: VertexRef },
    /// Gezogenen Punkt bewegen
    DragVertexTo { point: GeoPoint },
    /// Drag übernehmen
    CommitVertexMove,
    /// Mittelpunkt einfügen und ziehen
    InsertVertexAtMidpoint {
        target: FieldTarget,
        edge_index: usize,
        point: GeoPoint,
    },
    /// Drag verwerfen
    CancelEdit,
    /// Eckpunkt entfernen
    DeleteVertex { vertex: VertexRef },

    // === History ===
    /// Undo ausführen
    Undo,
    /// Redo ausführen
    Redo,

    // === Kamera & Karte ===
    /// Kamera verschieben (Pixel)
    PanCamera { delta: glam::DVec2 },
    /// Kamera per Mausrad zoomen
    ZoomCamera {
        factor: f64,
        focus: Option<GeoPoint>,
    },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Karte ist bereit
    MarkMapLoaded,
    /// Karte entfernt: laufende Bearbeitung abbrechen
    HandleMapUnmounted,

    // === Standort ===
    /// Standortabfrage starten
    RequestLocation,
    /// Meldung schließen
    DismissAlert,

    // === Gespeicherte Karten ===
    /// Speichern-Dialog öffnen
    OpenSaveMapDialog { field: FieldId },
    /// Speichern-Dialog schließen
    CloseSaveMapDialog,
    /// Feld als benannte Karte speichern
    SaveMap {
        field: FieldId,
        name: String,
        description: String,
        group: String,
    },
    /// Gespeicherte Karte als neues Feld laden
    LoadSavedMap { id: u64 },
    /// Gespeicherte Karte löschen
    DeleteSavedMap { id: u64 },

    // === System ===
    /// Zeitgesteuerte Aufgaben ausführen
    Tick { now: Instant },
    /// Anwendung beenden
    RequestExit,
}
