//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, EditorMode};
use crate::core::FieldTarget;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Felder: {}", state.field_count()));

            if let Some(current) = state.store.current() {
                ui.separator();
                ui.label(format!("Feld in Arbeit: {} Punkte", current.point_count()));
            }

            ui.separator();

            let camera = &state.view.camera;
            ui.label(format!(
                "Zoom: {:.1} | Mitte: ({:.5}, {:.5})",
                camera.zoom, camera.center.lat, camera.center.lng
            ));

            ui.separator();

            let mode_name = match state.editor.mode {
                EditorMode::Edit => "Bearbeiten",
                EditorMode::Draw => "Zeichnen",
            };
            ui.label(format!("Modus: {}", mode_name));

            if let Some(vertex) = state.session.selected() {
                ui.separator();
                let field_name = match vertex.target {
                    FieldTarget::Current => "Feld in Arbeit".to_string(),
                    FieldTarget::Committed(id) => id.to_string(),
                };
                ui.label(format!("Punkt {} von {}", vertex.index + 1, field_name));
            }

            if state.session.is_dragging() {
                ui.separator();
                ui.label("Verschieben…");
            }

            // Statusnachricht (z.B. fehlender Kartenname)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let steps = ui.label(format!("Undo-Schritte: {}", state.history.cursor()));
                if let Some(command) = state.command_log.last() {
                    steps.on_hover_text(format!("Letzter Befehl: {:?}", command));
                }
            });
        });
    });
}
