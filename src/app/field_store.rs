//! Feld-Speicher: übernommene Felder plus höchstens ein Feld in Arbeit.
//!
//! Die übernommene Sammlung liegt hinter einem `Arc` (Copy-on-Write), damit
//! History-Snapshots O(1) bleiben. Jede Mutation erhöht `revision`, jede
//! Änderung der übernommenen Sammlung zusätzlich `committed_revision`.

use crate::core::{Field, FieldId, FieldIdGenerator, FieldTarget, GeoPoint, GeodesicProvider};
use indexmap::IndexMap;
use std::sync::Arc;

/// Geordnete Sammlung übernommener Felder.
pub type FieldMap = IndexMap<FieldId, Field>;

/// Übernommene Felder und das aktuelle Feld.
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    fields: Arc<FieldMap>,
    current: Option<Field>,
    ids: FieldIdGenerator,
    revision: u64,
    committed_revision: u64,
}

impl FieldStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Speicher aus geladenen Feldern.
    ///
    /// Der ID-Generator wird mit der höchsten geladenen ID initialisiert.
    /// Doppelte IDs erhalten eine frische ID, statt ein Feld zu überschreiben.
    pub fn from_fields(fields: Vec<Field>) -> Self {
        let mut store = Self::new();
        for field in &fields {
            store.ids.observe(field.id);
        }

        let map = Arc::make_mut(&mut store.fields);
        map.reserve(fields.len());
        let mut duplicates = Vec::new();
        for field in fields {
            if map.contains_key(&field.id) {
                duplicates.push(field);
            } else {
                map.insert(field.id, field);
            }
        }

        for mut field in duplicates {
            let old_id = field.id;
            field.id = store.allocate_id();
            log::warn!(
                "Doppelte Feld-ID {} beim Laden, neu vergeben als {}",
                old_id,
                field.id
            );
            Arc::make_mut(&mut store.fields).insert(field.id, field);
        }
        store
    }

    /// Vergibt eine neue ID. Ist der Generator erschöpft, wird die kleinste
    /// freie ID genommen.
    fn allocate_id(&mut self) -> FieldId {
        if let Some(id) = self.ids.next_id() {
            return id;
        }
        let current = self.current.as_ref().map(|field| field.id);
        let id = (1..u64::MAX)
            .map(FieldId)
            .find(|id| !self.fields.contains_key(id) && current != Some(*id))
            .unwrap_or(FieldId(0));
        log::warn!("Feld-IDs erschöpft, verwende freie ID {}", id);
        id
    }

    /// Übernommene Felder in Einfügereihenfolge.
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// O(1)-Klon der übernommenen Sammlung (für Snapshots).
    pub fn shared_fields(&self) -> Arc<FieldMap> {
        Arc::clone(&self.fields)
    }

    /// Das Feld in Arbeit.
    pub fn current(&self) -> Option<&Field> {
        self.current.as_ref()
    }

    /// Gibt `true` zurück, wenn gerade ein Feld gezeichnet wird.
    pub fn has_current(&self) -> bool {
        self.current.is_some()
    }

    /// Feld zum Ziel.
    pub fn field(&self, target: FieldTarget) -> Option<&Field> {
        match target {
            FieldTarget::Current => self.current.as_ref(),
            FieldTarget::Committed(id) => self.fields.get(&id),
        }
    }

    /// Aktuelle Punktfolge des Ziels.
    pub fn points(&self, target: FieldTarget) -> Option<&[GeoPoint]> {
        self.field(target).map(|f| f.points.as_slice())
    }

    /// Anzahl übernommener Felder.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Zähler für jede Änderung an Feldern oder dem aktuellen Feld.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Zähler für Änderungen an der übernommenen Sammlung.
    pub fn committed_revision(&self) -> u64 {
        self.committed_revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn touch_committed(&mut self) {
        self.revision += 1;
        self.committed_revision += 1;
    }

    fn commit_field(&mut self, mut field: Field, geo: &dyn GeodesicProvider) -> FieldId {
        field.recompute(geo);
        let id = field.id;
        Arc::make_mut(&mut self.fields).insert(id, field);
        self.touch_committed();
        id
    }

    /// Legt ein neues, leeres aktuelles Feld an.
    ///
    /// Ein bestehendes aktuelles Feld mit mindestens einem Punkt wird vorher
    /// übernommen, ein leeres verworfen.
    pub fn create_field(&mut self, geo: &dyn GeodesicProvider) -> FieldId {
        if let Some(previous) = self.current.take() {
            if previous.points.is_empty() {
                log::debug!("Leeres Feld {} verworfen", previous.id);
            } else {
                let id = self.commit_field(previous, geo);
                log::info!("Unfertiges Feld {} übernommen", id);
            }
        }

        let id = self.allocate_id();
        self.current = Some(Field::new(id));
        self.touch();
        log::info!("Neues Feld {} angelegt", id);
        id
    }

    /// Hängt einen Punkt an das aktuelle Feld an.
    ///
    /// Die Messwerte werden nicht sofort neu berechnet (siehe
    /// [`FieldStore::recompute_current`]).
    pub fn append_point(&mut self, point: GeoPoint) -> bool {
        if !point.is_finite() {
            log::warn!("Ungültiger Punkt verworfen: {:?}", point);
            return false;
        }
        let Some(current) = self.current.as_mut() else {
            log::debug!("Kein Feld in Arbeit, Punkt ignoriert");
            return false;
        };
        current.points.push(point);
        self.touch();
        true
    }

    /// Berechnet die Messwerte des aktuellen Feldes neu.
    ///
    /// Abgeleitete Werte zählen nicht als Änderung (keine neue Revision).
    pub fn recompute_current(&mut self, geo: &dyn GeodesicProvider) -> bool {
        match self.current.as_mut() {
            Some(current) => {
                current.recompute(geo);
                true
            }
            None => false,
        }
    }

    /// Übernimmt das aktuelle Feld in die Sammlung.
    ///
    /// Ein Feld ohne Punkte wird verworfen. Liefert die ID des übernommenen
    /// Feldes.
    pub fn finalize_current_field(&mut self, geo: &dyn GeodesicProvider) -> Option<FieldId> {
        let current = self.current.take()?;
        if current.points.is_empty() {
            self.touch();
            log::info!("Leeres Feld {} verworfen", current.id);
            return None;
        }
        let id = self.commit_field(current, geo);
        log::info!("Feld {} abgeschlossen", id);
        Some(id)
    }

    /// Fügt eine Punktfolge als neues übernommenes Feld mit frischer ID ein.
    pub fn import_field(
        &mut self,
        points: Vec<GeoPoint>,
        geo: &dyn GeodesicProvider,
    ) -> Option<FieldId> {
        if points.is_empty() || points.iter().any(|p| !p.is_finite()) {
            return None;
        }
        let id = self.allocate_id();
        let mut field = Field::new(id);
        field.points = points;
        Some(self.commit_field(field, geo))
    }

    /// Ersetzt die Punktfolge eines Feldes und berechnet nur dieses neu.
    ///
    /// Einziger Schreibpfad für Drag-Commits, Mittelpunkt-Einfügen und
    /// Kantenlängen. Fehlendes Ziel: `false`, keine Änderung.
    pub fn update_field_points(
        &mut self,
        target: FieldTarget,
        points: Vec<GeoPoint>,
        geo: &dyn GeodesicProvider,
    ) -> bool {
        if points.iter().any(|p| !p.is_finite()) {
            log::warn!("Punktfolge mit ungültigen Koordinaten verworfen");
            return false;
        }

        match target {
            FieldTarget::Current => {
                let Some(current) = self.current.as_mut() else {
                    return false;
                };
                current.points = points;
                current.recompute(geo);
                self.touch();
            }
            FieldTarget::Committed(id) => {
                if !self.fields.contains_key(&id) {
                    return false;
                }
                let fields = Arc::make_mut(&mut self.fields);
                let Some(field) = fields.get_mut(&id) else {
                    return false;
                };
                field.points = points;
                field.recompute(geo);
                self.touch_committed();
            }
        }
        true
    }

    /// Entfernt einen Eckpunkt.
    ///
    /// Verliert ein übernommenes Feld dabei seinen letzten Punkt, wird das
    /// Feld gelöscht.
    pub fn delete_vertex(
        &mut self,
        target: FieldTarget,
        index: usize,
        geo: &dyn GeodesicProvider,
    ) -> bool {
        let Some(points) = self.points(target) else {
            return false;
        };
        if index >= points.len() {
            return false;
        }

        let mut points = points.to_vec();
        points.remove(index);

        match target {
            FieldTarget::Committed(id) if points.is_empty() => self.delete_field(id),
            _ => self.update_field_points(target, points, geo),
        }
    }

    /// Löscht ein übernommenes Feld.
    pub fn delete_field(&mut self, id: FieldId) -> bool {
        if !self.fields.contains_key(&id) {
            log::debug!("Feld {} nicht vorhanden, nichts gelöscht", id);
            return false;
        }
        Arc::make_mut(&mut self.fields).shift_remove(&id);
        self.touch_committed();
        log::info!("Feld {} gelöscht", id);
        true
    }

    /// Entfernt alle Felder inklusive des aktuellen.
    pub fn clear_all(&mut self) {
        self.fields = Arc::new(FieldMap::new());
        self.current = None;
        self.touch_committed();
        log::info!("Alle Felder gelöscht");
    }

    /// Stellt einen früheren Zustand wieder her (Undo/Redo).
    ///
    /// Die Messwerte des aktuellen Feldes werden neu berechnet, da Snapshots
    /// auch vor Ablauf des Mess-Debounce entstehen.
    pub fn restore(
        &mut self,
        fields: Arc<FieldMap>,
        current: Option<Field>,
        geo: &dyn GeodesicProvider,
    ) {
        for id in fields.keys() {
            self.ids.observe(*id);
        }
        self.fields = fields;
        self.current = current.map(|mut field| {
            self.ids.observe(field.id);
            field.recompute(geo);
            field
        });
        self.touch_committed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HaversineGeodesic;

    fn square() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.001),
            GeoPoint::new(0.001, 0.001),
            GeoPoint::new(0.001, 0.0),
        ]
    }

    fn store_with_field() -> (FieldStore, FieldId) {
        let geo = HaversineGeodesic::new();
        let mut store = FieldStore::new();
        store.create_field(&geo);
        for p in square() {
            store.append_point(p);
        }
        let id = store.finalize_current_field(&geo).unwrap();
        (store, id)
    }

    #[test]
    fn new_field_after_highest_possible_id_gets_free_id() {
        let geo = HaversineGeodesic::new();
        let stored = Field::with_points(FieldId(u64::MAX), square(), &geo);
        let mut store = FieldStore::from_fields(vec![stored]);

        let first = store.create_field(&geo);
        store.append_point(GeoPoint::new(1.0, 1.0));
        let second = store.create_field(&geo);

        assert_eq!(first, FieldId(1));
        assert_eq!(second, FieldId(2));
        assert_eq!(store.field_count(), 2);
        assert!(store.fields().contains_key(&FieldId(u64::MAX)));
    }

    #[test]
    fn finalize_moves_current_into_collection() {
        let (store, id) = store_with_field();
        assert!(!store.has_current());
        let field = &store.fields()[&id];
        assert_eq!(field.points, square());
        assert_eq!(field.measurements.len(), 4);
        assert!(field.area > 0.0);
    }

    #[test]
    fn append_without_current_is_ignored() {
        let mut store = FieldStore::new();
        assert!(!store.append_point(GeoPoint::new(1.0, 1.0)));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn append_rejects_non_finite_points() {
        let geo = HaversineGeodesic::new();
        let mut store = FieldStore::new();
        store.create_field(&geo);
        assert!(!store.append_point(GeoPoint::new(f64::NAN, 0.0)));
        assert!(store.current().unwrap().points.is_empty());
    }

    #[test]
    fn create_field_commits_unfinished_field() {
        let geo = HaversineGeodesic::new();
        let mut store = FieldStore::new();
        let first = store.create_field(&geo);
        store.append_point(GeoPoint::new(1.0, 1.0));

        let second = store.create_field(&geo);

        assert_ne!(first, second);
        assert!(store.fields().contains_key(&first));
        assert_eq!(store.current().map(|f| f.id), Some(second));
    }

    #[test]
    fn create_field_drops_empty_current() {
        let geo = HaversineGeodesic::new();
        let mut store = FieldStore::new();
        store.create_field(&geo);
        store.create_field(&geo);
        assert_eq!(store.field_count(), 0);
    }

    #[test]
    fn finalize_empty_field_commits_nothing() {
        let geo = HaversineGeodesic::new();
        let mut store = FieldStore::new();
        store.create_field(&geo);
        assert_eq!(store.finalize_current_field(&geo), None);
        assert_eq!(store.field_count(), 0);
        assert!(!store.has_current());
    }

    #[test]
    fn update_missing_target_changes_nothing() {
        let geo = HaversineGeodesic::new();
        let (mut store, _) = store_with_field();
        let revision = store.revision();
        assert!(!store.update_field_points(
            FieldTarget::Committed(FieldId(1)),
            square(),
            &geo
        ));
        assert!(!store.update_field_points(FieldTarget::Current, square(), &geo));
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn update_recomputes_only_target() {
        let geo = HaversineGeodesic::new();
        let (mut store, id) = store_with_field();
        let mut points = square();
        points.pop();

        assert!(store.update_field_points(FieldTarget::Committed(id), points, &geo));
        assert_eq!(store.fields()[&id].measurements.len(), 3);
    }

    #[test]
    fn snapshot_clone_is_unaffected_by_updates() {
        let geo = HaversineGeodesic::new();
        let (mut store, id) = store_with_field();
        let before = store.shared_fields();

        store.update_field_points(FieldTarget::Committed(id), vec![GeoPoint::new(5.0, 5.0)], &geo);

        assert_eq!(before[&id].points, square());
        assert_eq!(store.fields()[&id].points.len(), 1);
    }

    #[test]
    fn deleting_last_vertex_removes_committed_field() {
        let geo = HaversineGeodesic::new();
        let mut store = FieldStore::new();
        store.create_field(&geo);
        store.append_point(GeoPoint::new(1.0, 1.0));
        let id = store.finalize_current_field(&geo).unwrap();

        assert!(store.delete_vertex(FieldTarget::Committed(id), 0, &geo));
        assert_eq!(store.field_count(), 0);
    }

    #[test]
    fn committed_revision_ignores_current_field_edits() {
        let geo = HaversineGeodesic::new();
        let mut store = FieldStore::new();
        store.create_field(&geo);
        store.append_point(GeoPoint::new(1.0, 1.0));
        assert_eq!(store.committed_revision(), 0);
        assert!(store.revision() > 0);
    }

    #[test]
    fn from_fields_seeds_id_generator() {
        let geo = HaversineGeodesic::new();
        let far = FieldId(u64::MAX / 4);
        let mut store = FieldStore::from_fields(vec![Field::new(far)]);
        let id = store.create_field(&geo);
        assert!(id > far);
    }
}
