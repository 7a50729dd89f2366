mod hit_test;
mod paint;

pub use paint::paint_scene;

use super::keyboard::{self, KeyboardContext};
use crate::app::AppIntent;
use crate::shared::FieldScene;
use glam::DVec2;
use hit_test::{pick_midpoint, pick_vertex, to_geo};

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PrimaryDragMode {
    #[default]
    None,
    /// Eckpunkt oder neuer Mittelpunkt wird verschoben
    VertexMove,
    CameraPan,
}

/// Verwaltet den Input-Zustand der Kartenansicht (Drag-Modus, Lade-Status).
#[derive(Debug, Default)]
pub struct MapViewState {
    primary_drag_mode: PrimaryDragMode,
    loaded: bool,
}

impl MapViewState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus-, Scroll- und Drag-Interaktionen
    /// sowie Keyboard-Shortcuts über der Karte.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        scene: &FieldScene,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if !self.loaded {
            self.loaded = true;
            events.push(AppIntent::MapLoaded);
        }

        events.push(AppIntent::ViewportResized {
            size: scene.viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(
            ui,
            KeyboardContext {
                has_selection: scene.selected.is_some(),
                has_current: scene.has_current,
                dragging: scene.dragging,
            },
        ));

        let pick_radius = scene.options.vertex_pick_radius_px as f64;

        self.handle_hover(response, scene, pick_radius, &mut events);
        self.handle_drag_start(ui, response, scene, pick_radius, &mut events);
        self.handle_drag_update(response, scene, &mut events);
        self.handle_drag_end(response, &mut events);
        Self::handle_clicks(response, scene, pick_radius, &mut events);
        Self::handle_scroll_zoom(ui, response, scene, &mut events);

        events
    }

    fn handle_hover(
        &self,
        response: &egui::Response,
        scene: &FieldScene,
        pick_radius: f64,
        events: &mut Vec<AppIntent>,
    ) {
        if self.primary_drag_mode != PrimaryDragMode::None {
            return;
        }
        let hovered = response
            .hover_pos()
            .and_then(|pos| pick_vertex(scene, local_pos(pos, response), pick_radius));
        if hovered != scene.hovered {
            events.push(AppIntent::VertexHovered { vertex: hovered });
        }
    }

    /// Erkennt Drag-Beginn: Eckpunkt vor Mittelpunkt-Griff vor Kamera-Pan.
    fn handle_drag_start(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        scene: &FieldScene,
        pick_radius: f64,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() liefert die Klickposition vor der Drag-Schwelle
        let Some(press_pos) = ui
            .input(|i| i.pointer.press_origin())
            .map(|pos| local_pos(pos, response))
        else {
            return;
        };

        if let Some(vertex) = pick_vertex(scene, press_pos, pick_radius) {
            events.push(AppIntent::VertexDragStarted { vertex });
            self.primary_drag_mode = PrimaryDragMode::VertexMove;
        } else if let Some((target, edge_index)) = pick_midpoint(scene, press_pos, pick_radius) {
            events.push(AppIntent::MidpointDragStarted { target, edge_index });
            self.primary_drag_mode = PrimaryDragMode::VertexMove;
        } else if scene.pan_enabled {
            self.primary_drag_mode = PrimaryDragMode::CameraPan;
        }
    }

    fn handle_drag_update(
        &self,
        response: &egui::Response,
        scene: &FieldScene,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.dragged_by(egui::PointerButton::Primary) {
            return;
        }

        match self.primary_drag_mode {
            PrimaryDragMode::VertexMove => {
                if let Some(pos) = response.interact_pointer_pos() {
                    events.push(AppIntent::VertexDragged {
                        point: to_geo(scene, local_pos(pos, response)),
                    });
                }
            }
            PrimaryDragMode::CameraPan => {
                let delta = response.drag_delta();
                if delta != egui::Vec2::ZERO {
                    events.push(AppIntent::CameraPan {
                        delta: DVec2::new(delta.x as f64, delta.y as f64),
                    });
                }
            }
            PrimaryDragMode::None => {}
        }
    }

    fn handle_drag_end(&mut self, response: &egui::Response, events: &mut Vec<AppIntent>) {
        if !response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }
        if self.primary_drag_mode == PrimaryDragMode::VertexMove {
            events.push(AppIntent::VertexDragEnded);
        }
        self.primary_drag_mode = PrimaryDragMode::None;
    }

    /// Linksklick: Eckpunkt auswählen oder Kartenklick. Rechtsklick auf
    /// einen Eckpunkt löscht ihn.
    fn handle_clicks(
        response: &egui::Response,
        scene: &FieldScene,
        pick_radius: f64,
        events: &mut Vec<AppIntent>,
    ) {
        let Some(pos) = response
            .interact_pointer_pos()
            .map(|pos| local_pos(pos, response))
        else {
            return;
        };

        if response.clicked() {
            if let Some(vertex) = pick_vertex(scene, pos, pick_radius) {
                events.push(AppIntent::VertexClicked { vertex });
            } else {
                events.push(AppIntent::MapClicked {
                    point: to_geo(scene, pos),
                });
            }
        }

        if response.secondary_clicked() {
            if let Some(vertex) = pick_vertex(scene, pos, pick_radius) {
                events.push(AppIntent::DeleteVertexRequested { vertex });
            }
        }
    }

    /// Scroll-Zoom auf die aktuelle Mausposition.
    fn handle_scroll_zoom(
        ui: &egui::Ui,
        response: &egui::Response,
        scene: &FieldScene,
        events: &mut Vec<AppIntent>,
    ) {
        if !scene.scroll_zoom_enabled {
            return;
        }
        let Some(hover_pos) = response.hover_pos() else {
            return;
        };
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let step = scene.options.camera_scroll_zoom_step;
        let factor = if scroll > 0.0 { step } else { 1.0 / step };
        events.push(AppIntent::CameraZoom {
            factor,
            focus: Some(to_geo(scene, local_pos(hover_pos, response))),
        });
    }
}

/// Rechnet eine Bildschirmposition in Viewport-Pixel um.
fn local_pos(pos: egui::Pos2, response: &egui::Response) -> DVec2 {
    let local = pos - response.rect.min;
    DVec2::new(local.x as f64, local.y as f64)
}
