//! Trefferprüfung von Eckpunkten und Mittelpunkt-Griffen in Bildschirmkoordinaten.

use crate::core::{midpoint, FieldTarget, GeoPoint, VertexRef};
use crate::shared::{FieldScene, FieldShape};
use glam::DVec2;

/// Viewport-Größe der Szene als Vektor.
pub(crate) fn viewport_vec(scene: &FieldScene) -> DVec2 {
    DVec2::new(
        scene.viewport_size[0] as f64,
        scene.viewport_size[1] as f64,
    )
}

/// Bildschirmposition eines Punkts (Ursprung oben links im Viewport).
pub(crate) fn to_screen(scene: &FieldScene, point: GeoPoint) -> DVec2 {
    scene.camera.geo_to_screen(point, viewport_vec(scene))
}

/// Punkt unter einer Bildschirmposition.
pub(crate) fn to_geo(scene: &FieldScene, screen_pos: DVec2) -> GeoPoint {
    scene.camera.screen_to_geo(screen_pos, viewport_vec(scene))
}

/// Mittelpunkte aller sichtbaren Kanten eines Feldes.
pub(crate) fn edge_midpoints(shape: &FieldShape) -> impl Iterator<Item = (usize, GeoPoint)> + '_ {
    let n = shape.points.len();
    (0..shape.visible_edge_count())
        .map(move |i| (i, midpoint(shape.points[i], shape.points[(i + 1) % n])))
}

/// Nächster Eckpunkt innerhalb von `radius_px`.
///
/// Das aktuelle Feld wird zuletzt gezeichnet und hat bei Überlappung Vorrang.
pub(crate) fn pick_vertex(
    scene: &FieldScene,
    screen_pos: DVec2,
    radius_px: f64,
) -> Option<VertexRef> {
    let mut best: Option<(f64, VertexRef)> = None;
    for shape in scene.fields.iter().rev() {
        for (index, point) in shape.points.iter().enumerate() {
            let distance = to_screen(scene, *point).distance(screen_pos);
            if distance > radius_px {
                continue;
            }
            if best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, VertexRef::new(shape.target, index)));
            }
        }
    }
    best.map(|(_, vertex)| vertex)
}

/// Nächster Mittelpunkt-Griff innerhalb von `radius_px`.
pub(crate) fn pick_midpoint(
    scene: &FieldScene,
    screen_pos: DVec2,
    radius_px: f64,
) -> Option<(FieldTarget, usize)> {
    let mut best: Option<(f64, FieldTarget, usize)> = None;
    for shape in scene.fields.iter().rev() {
        for (edge_index, point) in edge_midpoints(shape) {
            let distance = to_screen(scene, point).distance(screen_pos);
            if distance > radius_px {
                continue;
            }
            if best.is_none_or(|(d, _, _)| distance < d) {
                best = Some((distance, shape.target, edge_index));
            }
        }
    }
    best.map(|(_, target, edge_index)| (target, edge_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppController, AppIntent, AppState};

    fn scene_with_current_field() -> FieldScene {
        let mut controller = AppController::new();
        let mut state = AppState::new();
        state.view.camera.look_at(GeoPoint::new(0.0005, 0.0005));
        state.view.camera.set_zoom(18.0);
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
        controller.build_render_scene(&state, [800.0, 600.0])
    }

    #[test]
    fn vertex_under_cursor_is_picked() {
        let scene = scene_with_current_field();
        let pos = to_screen(&scene, GeoPoint::new(0.0, 0.001)) + DVec2::new(3.0, -2.0);

        let hit = pick_vertex(&scene, pos, 10.0);

        assert_eq!(hit, Some(VertexRef::new(FieldTarget::Current, 1)));
    }

    #[test]
    fn vertex_outside_radius_is_ignored() {
        let scene = scene_with_current_field();
        let pos = to_screen(&scene, GeoPoint::new(0.0, 0.001)) + DVec2::new(30.0, 0.0);

        assert_eq!(pick_vertex(&scene, pos, 10.0), None);
    }

    #[test]
    fn midpoint_handle_is_picked() {
        let scene = scene_with_current_field();
        let pos = to_screen(&scene, GeoPoint::new(0.0, 0.0005));

        let hit = pick_midpoint(&scene, pos, 8.0);

        assert_eq!(hit, Some((FieldTarget::Current, 0)));
    }

    #[test]
    fn screen_round_trip_stays_close() {
        let scene = scene_with_current_field();
        let point = GeoPoint::new(0.0003, 0.0007);

        let back = to_geo(&scene, to_screen(&scene, point));

        approx::assert_abs_diff_eq!(back.lat, point.lat, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(back.lng, point.lng, epsilon = 1e-9);
    }
}
