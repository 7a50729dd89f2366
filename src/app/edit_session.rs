//! Bearbeitungssitzung: Selektion, Hover und Drag von Eckpunkten.
//!
//! Während eines Drags wird nur der Entwurf (`draft`) verändert; der
//! Feld-Speicher bleibt bis zum `commit()` unberührt.

use super::collaborators::MapSurface;
use super::field_store::FieldStore;
use crate::core::{FieldTarget, GeoPoint, GeodesicProvider, VertexRef};

/// Art des laufenden Drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Bestehenden Eckpunkt verschieben
    MoveVertex,
    /// Neu eingefügten Mittelpunkt verschieben
    InsertMidpoint,
}

/// Laufender Drag mit eigenem Entwurf der Punktfolge.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Bearbeitetes Feld
    pub target: FieldTarget,
    /// Index des gezogenen Punkts im Entwurf
    pub index: usize,
    /// Entwurf der Punktfolge
    pub draft: Vec<GeoPoint>,
    /// Art des Drags
    pub kind: DragKind,
}

impl DragSession {
    /// Gezogener Eckpunkt als Verweis.
    pub fn vertex(&self) -> VertexRef {
        VertexRef::new(self.target, self.index)
    }
}

/// Phase der Bearbeitungssitzung.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionPhase {
    /// Nichts ausgewählt
    #[default]
    Idle,
    /// Eckpunkt ausgewählt, kein Drag
    Selecting(VertexRef),
    /// Drag läuft
    Dragging(DragSession),
}

/// Kollaborateure, die die Sitzung für Start und Commit braucht.
pub struct SessionContext<'a> {
    /// Feld-Speicher (Live-Punktfolgen und Schreibpfad)
    pub store: &'a mut FieldStore,
    /// Karte (Interaktion sperren/freigeben)
    pub map: &'a mut dyn MapSurface,
    /// Geodäsie für die Neuberechnung beim Commit
    pub geodesic: &'a dyn GeodesicProvider,
}

/// Zustand der Eckpunkt-Bearbeitung.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    phase: SessionPhase,
    hovered: Option<VertexRef>,
    frame_pending: bool,
}

impl EditSession {
    /// Erstellt eine leere Sitzung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Gibt `true` zurück, solange ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, SessionPhase::Dragging(_))
    }

    /// Laufender Drag.
    pub fn drag(&self) -> Option<&DragSession> {
        match &self.phase {
            SessionPhase::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    /// Entwurf, falls gerade `target` gezogen wird.
    pub fn draft_for(&self, target: FieldTarget) -> Option<&[GeoPoint]> {
        self.drag()
            .filter(|d| d.target == target)
            .map(|d| d.draft.as_slice())
    }

    /// Ausgewählter Eckpunkt (auch während eines Drags).
    pub fn selected(&self) -> Option<VertexRef> {
        match &self.phase {
            SessionPhase::Idle => None,
            SessionPhase::Selecting(vertex) => Some(*vertex),
            SessionPhase::Dragging(drag) => Some(drag.vertex()),
        }
    }

    /// Eckpunkt unter dem Zeiger.
    pub fn hovered(&self) -> Option<VertexRef> {
        self.hovered
    }

    /// Setzt den Hover-Seitenkanal. Kein Teil von Store oder History.
    pub fn set_hovered(&mut self, vertex: Option<VertexRef>) {
        self.hovered = vertex;
    }

    /// Wählt einen Eckpunkt aus. Während eines Drags ohne Wirkung.
    pub fn select(&mut self, store: &FieldStore, vertex: VertexRef) -> bool {
        if self.is_dragging() {
            return false;
        }
        let valid = store
            .points(vertex.target)
            .is_some_and(|points| vertex.index < points.len());
        if !valid {
            log::debug!("Eckpunkt {:?} existiert nicht", vertex);
            return false;
        }
        self.phase = SessionPhase::Selecting(vertex);
        true
    }

    /// Hebt die Auswahl auf (ein laufender Drag bleibt unberührt).
    pub fn clear_selection(&mut self) {
        if matches!(self.phase, SessionPhase::Selecting(_)) {
            self.phase = SessionPhase::Idle;
        }
    }

    /// Startet das Verschieben eines Eckpunkts.
    ///
    /// Ein laufender Drag wird vorher implizit übernommen. Unbekanntes Ziel
    /// oder Index: keine Wirkung.
    pub fn start_move(
        &mut self,
        ctx: &mut SessionContext<'_>,
        target: FieldTarget,
        index: usize,
    ) -> bool {
        if self.is_dragging() {
            self.commit(ctx);
        }

        let Some(points) = ctx.store.points(target) else {
            log::debug!("Drag-Start: Feld {:?} nicht vorhanden", target);
            return false;
        };
        if index >= points.len() {
            log::debug!("Drag-Start: Index {} außerhalb ({} Punkte)", index, points.len());
            return false;
        }

        let draft = points.to_vec();
        self.begin_drag(ctx.map, target, index, draft, DragKind::MoveVertex);
        true
    }

    /// Fügt `point` hinter Kante `edge_index` in den Entwurf ein und zieht ihn.
    pub fn insert_at_midpoint(
        &mut self,
        ctx: &mut SessionContext<'_>,
        target: FieldTarget,
        edge_index: usize,
        point: GeoPoint,
    ) -> bool {
        if self.is_dragging() {
            self.commit(ctx);
        }
        if !point.is_finite() {
            return false;
        }

        let Some(points) = ctx.store.points(target) else {
            log::debug!("Mittelpunkt: Feld {:?} nicht vorhanden", target);
            return false;
        };
        if points.len() < 2 || edge_index >= points.len() {
            log::debug!("Mittelpunkt: Kante {} existiert nicht", edge_index);
            return false;
        }

        let mut draft = points.to_vec();
        let index = edge_index + 1;
        draft.insert(index, point);
        self.begin_drag(ctx.map, target, index, draft, DragKind::InsertMidpoint);
        true
    }

    fn begin_drag(
        &mut self,
        map: &mut dyn MapSurface,
        target: FieldTarget,
        index: usize,
        draft: Vec<GeoPoint>,
        kind: DragKind,
    ) {
        map.set_interaction_enabled(false, false, false);
        self.phase = SessionPhase::Dragging(DragSession {
            target,
            index,
            draft,
            kind,
        });
        self.frame_pending = true;
    }

    /// Bewegt den gezogenen Punkt im Entwurf. Der Store bleibt unverändert.
    pub fn drag_to(&mut self, point: GeoPoint) -> bool {
        if !point.is_finite() {
            return false;
        }
        let SessionPhase::Dragging(drag) = &mut self.phase else {
            return false;
        };
        let Some(slot) = drag.draft.get_mut(drag.index) else {
            return false;
        };
        *slot = point;
        self.frame_pending = true;
        true
    }

    /// Schreibt den Entwurf zurück. Idempotent.
    ///
    /// Die Karte wird immer zuerst wieder freigegeben. Die Grenzen ergeben
    /// sich aus der Live-Punktfolge zum Commit-Zeitpunkt.
    pub fn commit(&mut self, ctx: &mut SessionContext<'_>) -> bool {
        ctx.map.set_interaction_enabled(true, true, true);

        let SessionPhase::Dragging(drag) = std::mem::take(&mut self.phase) else {
            return false;
        };
        self.frame_pending = true;

        let Some(live) = ctx.store.points(drag.target) else {
            log::debug!("Commit verworfen: Feld {:?} nicht mehr vorhanden", drag.target);
            return false;
        };

        let points = match drag.kind {
            DragKind::MoveVertex if live.len() == drag.draft.len() => drag.draft,
            DragKind::MoveVertex if drag.index < live.len() => {
                let mut points = live.to_vec();
                points[drag.index] = drag.draft[drag.index];
                points
            }
            DragKind::InsertMidpoint if live.len() + 1 == drag.draft.len() => drag.draft,
            _ => {
                log::debug!(
                    "Commit verworfen: Punktanzahl geändert ({} live, {} Entwurf)",
                    live.len(),
                    drag.draft.len()
                );
                return false;
            }
        };

        if points.as_slice() == live {
            log::debug!("Commit ohne Änderung an {:?}", drag.target);
            return false;
        }

        ctx.store.update_field_points(drag.target, points, ctx.geodesic)
    }

    /// Verwirft den Entwurf und gibt die Karte frei.
    pub fn cancel(&mut self, map: &mut dyn MapSurface) {
        map.set_interaction_enabled(true, true, true);
        if self.is_dragging() {
            self.frame_pending = true;
            log::debug!("Drag abgebrochen");
        }
        self.phase = SessionPhase::Idle;
    }

    /// Setzt Auswahl, Hover und Drag zurück (z.B. nach Undo).
    pub fn reset(&mut self, map: &mut dyn MapSurface) {
        self.cancel(map);
        self.hovered = None;
    }

    /// Liefert einmalig, ob seit dem letzten Frame neu gezeichnet werden muss.
    pub fn take_frame_pending(&mut self) -> bool {
        std::mem::take(&mut self.frame_pending)
    }
}
