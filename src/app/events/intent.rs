use super::super::state::EditorMode;
use crate::core::{FieldId, FieldTarget, GeoPoint, VertexRef};
use std::time::Instant;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // === Felder ===
    /// Neues Feld beginnen (wechselt in den Zeichenmodus)
    StartNewFieldRequested,
    /// Aktuelles Feld abschließen
    FinalizeFieldRequested,
    /// Übernommenes Feld löschen
    DeleteFieldRequested { id: FieldId },
    /// Alle Felder löschen (inklusive Speicher)
    ClearAllRequested,
    /// Editor-Modus wechseln
    EditorModeChanged { mode: EditorMode },

    // === History ===
    /// Rückgängig
    UndoRequested,
    /// Wiederholen
    RedoRequested,

    // === Karte ===
    /// Klick auf die Karte (nicht auf einen Griff)
    MapClicked { point: GeoPoint },
    /// Karte ist bereit
    MapLoaded,
    /// Karte wurde entfernt
    MapUnmounted,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Pixel)
    CameraPan { delta: glam::DVec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus: Option<GeoPoint>,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,

    // === Eckpunkte ===
    /// Eckpunkt angeklickt
    VertexClicked { vertex: VertexRef },
    /// Zeiger über einem Eckpunkt (oder keinem)
    VertexHovered { vertex: Option<VertexRef> },
    /// Drag eines Eckpunkts beginnt
    VertexDragStarted { vertex: VertexRef },
    /// Gezogener Punkt bewegt sich
    VertexDragged { point: GeoPoint },
    /// Drag beendet (loslassen)
    VertexDragEnded,
    /// Drag am Mittelpunkt-Griff einer Kante beginnt
    MidpointDragStarted {
        target: FieldTarget,
        edge_index: usize,
    },
    /// Kantenlänge im Eigenschaften-Panel geändert
    EdgeLengthEdited {
        target: FieldTarget,
        edge_index: usize,
        length: f64,
    },
    /// Eckpunkt löschen
    DeleteVertexRequested { vertex: VertexRef },
    /// Ausgewählten Eckpunkt löschen
    DeleteSelectedVertexRequested,
    /// Laufende Bearbeitung abbrechen
    CancelEditRequested,

    // === Standort ===
    /// Karte auf den eigenen Standort zentrieren
    LocateRequested,
    /// Meldung schließen
    AlertDismissed,

    // === Gespeicherte Karten ===
    /// Karte-Speichern-Dialog für ein Feld öffnen
    SaveMapDialogRequested { field: FieldId },
    /// Dialog geschlossen ohne Speichern
    SaveMapDialogClosed,
    /// Feld unter Namen speichern
    SaveMapConfirmed {
        field: FieldId,
        name: String,
        description: String,
        group: String,
    },
    /// Gespeicherte Karte als neues Feld laden
    LoadSavedMapRequested { id: u64 },
    /// Gespeicherte Karte löschen
    DeleteSavedMapRequested { id: u64 },

    // === System ===
    /// Ein UI-Frame ist vergangen
    FrameTick { now: Instant },
    /// Anwendung beenden
    ExitRequested,
}
