//! Builder für Feld-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{compute_area, compute_perimeter, Field, FieldTarget};
use crate::shared::{FieldScene, FieldShape};

fn shape_of(state: &AppState, field: &Field, target: FieldTarget) -> FieldShape {
    match state.session.draft_for(target) {
        // Entwurf: Messwerte live aus dem Entwurf, Store bleibt unberührt
        Some(draft) => {
            let geo = state.geodesic.as_ref();
            let perimeter = compute_perimeter(geo, draft);
            FieldShape {
                target,
                id: field.id,
                points: draft.to_vec(),
                area: compute_area(geo, draft),
                perimeter: perimeter.total_distance,
                measurements: perimeter.measurements,
                is_current: target == FieldTarget::Current,
                is_draft: true,
            }
        }
        None => FieldShape {
            target,
            id: field.id,
            points: field.points.clone(),
            area: field.area,
            perimeter: field.perimeter,
            measurements: field.measurements.clone(),
            is_current: target == FieldTarget::Current,
            is_draft: false,
        },
    }
}

/// Baut eine FieldScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> FieldScene {
    let mut fields: Vec<FieldShape> = state
        .store
        .fields()
        .values()
        .map(|field| shape_of(state, field, FieldTarget::Committed(field.id)))
        .collect();
    if let Some(current) = state.store.current() {
        fields.push(shape_of(state, current, FieldTarget::Current));
    }

    FieldScene {
        fields,
        camera: state.view.camera.clone(),
        viewport_size,
        selected: state.session.selected(),
        hovered: state.session.hovered(),
        dragging: state.session.is_dragging(),
        drawing: state.editor.is_drawing(),
        has_current: state.store.has_current(),
        can_undo: state.can_undo(),
        can_redo: state.can_redo(),
        locating: state.ui.is_locating(),
        pan_enabled: state.view.interaction.pan,
        scroll_zoom_enabled: state.view.interaction.scroll,
        alert: state.ui.alert.clone(),
        saved_maps: state.ui.saved_maps.clone(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::{AppController, AppIntent, AppState};
    use crate::core::{FieldTarget, GeoPoint, VertexRef};

    fn state_with_triangle() -> (AppController, AppState) {
        let mut controller = AppController::new();
        let mut state = AppState::new();
        controller
            .handle_intent(&mut state, AppIntent::StartNewFieldRequested)
            .unwrap();
        for (lat, lng) in [(0.0, 0.0), (0.0, 0.001), (0.001, 0.001)] {
            controller
                .handle_intent(
                    &mut state,
                    AppIntent::MapClicked {
                        point: GeoPoint::new(lat, lng),
                    },
                )
                .unwrap();
        }
        controller
            .handle_intent(&mut state, AppIntent::FinalizeFieldRequested)
            .unwrap();
        (controller, state)
    }

    #[test]
    fn build_uses_draft_during_drag() {
        let (mut controller, mut state) = state_with_triangle();
        let id = *state.store.fields().keys().next().unwrap();
        let target = FieldTarget::Committed(id);
        let moved = GeoPoint::new(0.002, 0.0);

        controller
            .handle_intent(
                &mut state,
                AppIntent::VertexDragStarted {
                    vertex: VertexRef::new(target, 0),
                },
            )
            .unwrap();
        controller
            .handle_intent(&mut state, AppIntent::VertexDragged { point: moved })
            .unwrap();

        let scene = build(&state, [800.0, 600.0]);
        let shape = scene.shape(target).unwrap();
        assert!(shape.is_draft);
        assert_eq!(shape.points[0], moved);
        assert_eq!(shape.measurements.len(), 3);
        assert!(scene.dragging);
        assert!(!scene.pan_enabled);
        assert_eq!(state.store.fields()[&id].points[0], GeoPoint::new(0.0, 0.0));
    }

    #[test]
    fn build_reports_flags() {
        let (_, state) = state_with_triangle();
        let scene = build(&state, [800.0, 600.0]);
        assert_eq!(scene.fields.len(), 1);
        assert!(!scene.has_current);
        assert!(!scene.drawing);
        assert!(scene.can_undo);
        assert!(!scene.can_redo);
        assert!(!scene.locating);
    }
}
