//! Zeichnet die Feld-Szene mit dem egui-Painter.

use super::hit_test::{edge_midpoints, to_geo, to_screen, viewport_vec};
use crate::core::{format_area, format_length, GeoPoint, VertexRef};
use crate::shared::{EditorOptions, FieldScene, FieldShape};
use egui::{Color32, Pos2, Rect, Stroke};
use geo::TriangulateEarcut;
use glam::DVec2;

const BACKGROUND_COLOR: Color32 = Color32::from_rgb(28, 33, 38);
const GRATICULE_COLOR: Color32 = Color32::from_rgb(48, 56, 64);
const LABEL_COLOR: Color32 = Color32::WHITE;
/// Zielabstand der Gitterlinien in Pixeln.
const GRATICULE_SPACING_PX: f64 = 120.0;
/// Mögliche Gitterabstände in Grad.
const GRATICULE_STEPS: [f64; 16] = [
    0.000_01, 0.000_02, 0.000_05, 0.000_1, 0.000_2, 0.000_5, 0.001, 0.002, 0.005, 0.01, 0.02,
    0.05, 0.1, 0.5, 1.0, 10.0,
];
const MAX_GRATICULE_LINES: usize = 200;

/// Rechnet eine RGBA-Farbe aus den Optionen in `Color32` um.
fn color32(rgba: [f32; 4]) -> Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

fn to_pos(rect: Rect, screen: DVec2) -> Pos2 {
    rect.min + egui::vec2(screen.x as f32, screen.y as f32)
}

/// Zeichnet Hintergrund, Gitter und alle Felder einer Szene.
pub fn paint_scene(painter: egui::Painter, rect: Rect, scene: &FieldScene) {
    painter.rect_filled(rect, 0.0, BACKGROUND_COLOR);
    paint_graticule(&painter, rect, scene);

    for shape in &scene.fields {
        paint_field(&painter, rect, scene, shape);
    }

    if !scene.has_fields() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Keine Felder. „Neues Feld“ wählen und auf die Karte klicken.",
            egui::FontId::proportional(18.0),
            LABEL_COLOR,
        );
    }

    if scene.locating {
        painter.text(
            rect.center_top() + egui::vec2(0.0, 16.0),
            egui::Align2::CENTER_TOP,
            "Standort wird ermittelt…",
            egui::FontId::proportional(16.0),
            LABEL_COLOR,
        );
    }
}

/// Längen- und Breitengrade als Orientierung ohne Kartenkacheln.
fn paint_graticule(painter: &egui::Painter, rect: Rect, scene: &FieldScene) {
    let viewport = viewport_vec(scene);
    let degrees_per_px = 360.0 / scene.camera.world_size();
    let wanted = GRATICULE_SPACING_PX * degrees_per_px;
    let step = GRATICULE_STEPS
        .iter()
        .copied()
        .find(|s| *s >= wanted)
        .unwrap_or(10.0);

    let top_left = to_geo(scene, DVec2::ZERO);
    let bottom_right = to_geo(scene, viewport);
    let stroke = Stroke::new(1.0, GRATICULE_COLOR);

    let first_lng = (top_left.lng / step).floor() * step;
    for i in 0..MAX_GRATICULE_LINES {
        let lng = first_lng + i as f64 * step;
        if lng > bottom_right.lng {
            break;
        }
        let x = to_screen(scene, GeoPoint::new(scene.camera.center.lat, lng)).x;
        painter.vline(rect.min.x + x as f32, rect.y_range(), stroke);
    }

    let first_lat = (bottom_right.lat / step).floor() * step;
    for i in 0..MAX_GRATICULE_LINES {
        let lat = first_lat + i as f64 * step;
        if lat > top_left.lat {
            break;
        }
        let y = to_screen(scene, GeoPoint::new(lat, scene.camera.center.lng)).y;
        painter.hline(rect.x_range(), rect.min.y + y as f32, stroke);
    }
}

fn paint_field(painter: &egui::Painter, rect: Rect, scene: &FieldScene, shape: &FieldShape) {
    let options = &scene.options;
    let screen: Vec<Pos2> = shape
        .points
        .iter()
        .map(|p| to_pos(rect, to_screen(scene, *p)))
        .collect();

    let stroke_color = if shape.is_current {
        color32(options.current_field_stroke_color)
    } else {
        color32(options.field_stroke_color)
    };
    let stroke = Stroke::new(options.field_stroke_width_px, stroke_color);

    match screen.len() {
        0 | 1 => {}
        2 => {
            painter.line_segment([screen[0], screen[1]], stroke);
        }
        _ => {
            paint_fill(painter, &screen, color32(options.field_fill_color));
            painter.add(egui::Shape::closed_line(screen.clone(), stroke));
        }
    }

    if options.show_edge_labels {
        paint_edge_labels(painter, rect, scene, shape);
    }
    if shape.has_area() {
        paint_area_label(painter, &screen, shape.area);
    }
    if !scene.dragging {
        for (_, point) in edge_midpoints(shape) {
            painter.circle_filled(
                to_pos(rect, to_screen(scene, point)),
                options.midpoint_radius_px,
                color32(options.midpoint_color),
            );
        }
    }

    for (index, pos) in screen.iter().enumerate() {
        let vertex = VertexRef::new(shape.target, index);
        painter.circle(
            *pos,
            options.vertex_radius_px,
            vertex_color(options, scene, vertex),
            Stroke::new(1.0, Color32::BLACK),
        );
    }
}

fn vertex_color(options: &EditorOptions, scene: &FieldScene, vertex: VertexRef) -> Color32 {
    if scene.selected == Some(vertex) {
        color32(options.vertex_color_selected)
    } else if scene.hovered == Some(vertex) {
        color32(options.vertex_color_hovered)
    } else {
        color32(options.vertex_color)
    }
}

/// Füllt ein (auch konkaves) Polygon über eine Earcut-Triangulierung.
fn paint_fill(painter: &egui::Painter, screen: &[Pos2], color: Color32) {
    let exterior: Vec<geo::Coord<f64>> = screen
        .iter()
        .map(|p| geo::coord! { x: p.x as f64, y: p.y as f64 })
        .collect();
    let polygon = geo::Polygon::new(geo::LineString::new(exterior), vec![]);
    let triangulation = polygon.earcut_triangles_raw();

    let mut mesh = egui::Mesh::default();
    for xy in triangulation.vertices.chunks_exact(2) {
        mesh.colored_vertex(Pos2::new(xy[0] as f32, xy[1] as f32), color);
    }
    for tri in triangulation.triangle_indices.chunks_exact(3) {
        mesh.add_triangle(tri[0] as u32, tri[1] as u32, tri[2] as u32);
    }
    painter.add(egui::Shape::mesh(mesh));
}

fn paint_edge_labels(painter: &egui::Painter, rect: Rect, scene: &FieldScene, shape: &FieldShape) {
    for ((_, point), measurement) in edge_midpoints(shape).zip(&shape.measurements) {
        painter.text(
            to_pos(rect, to_screen(scene, point)) + egui::vec2(0.0, -10.0),
            egui::Align2::CENTER_BOTTOM,
            format_length(measurement.length),
            egui::FontId::proportional(12.0),
            LABEL_COLOR,
        );
    }
}

fn paint_area_label(painter: &egui::Painter, screen: &[Pos2], area: f64) {
    let sum = screen
        .iter()
        .fold(egui::Vec2::ZERO, |acc, p| acc + p.to_vec2());
    let centroid = (sum / screen.len() as f32).to_pos2();
    painter.text(
        centroid,
        egui::Align2::CENTER_CENTER,
        format_area(area),
        egui::FontId::proportional(14.0),
        LABEL_COLOR,
    );
}
