//! Toolbar für Feld-Aktionen, Modus, History und Standort.

use crate::app::{AppIntent, AppState, EditorMode};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let mode = state.editor.mode;
    let has_current = state.store.has_current();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // ── Felder ──
            if ui.button("➕ Neues Feld").clicked() {
                events.push(AppIntent::StartNewFieldRequested);
            }
            if ui
                .add_enabled(has_current, egui::Button::new("✔ Abschließen (Enter)"))
                .clicked()
            {
                events.push(AppIntent::FinalizeFieldRequested);
            }

            ui.separator();

            // ── Modus ──
            ui.label("Modus:");
            if ui
                .add(egui::Button::new("✋ Bearbeiten").selected(mode == EditorMode::Edit))
                .clicked()
                && mode != EditorMode::Edit
            {
                events.push(AppIntent::EditorModeChanged {
                    mode: EditorMode::Edit,
                });
            }
            if ui
                .add(egui::Button::new("✏ Zeichnen").selected(mode == EditorMode::Draw))
                .clicked()
                && mode != EditorMode::Draw
            {
                events.push(AppIntent::EditorModeChanged {
                    mode: EditorMode::Draw,
                });
            }

            ui.separator();

            // ── History ──
            if ui
                .add_enabled(state.can_undo(), egui::Button::new("↶ Undo"))
                .on_hover_text("Ctrl+Z")
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(state.can_redo(), egui::Button::new("↷ Redo"))
                .on_hover_text("Ctrl+Y")
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }

            ui.separator();

            let has_anything = state.field_count() > 0 || has_current;
            if ui
                .add_enabled(has_anything, egui::Button::new("🗑 Alles löschen"))
                .clicked()
            {
                events.push(AppIntent::ClearAllRequested);
            }

            ui.separator();

            // ── Standort ──
            let locating = state.ui.is_locating();
            if ui
                .add_enabled(!locating, egui::Button::new("📍 Mein Standort"))
                .clicked()
            {
                events.push(AppIntent::LocateRequested);
            }
            if locating {
                ui.spinner();
            }

            // Zoom-Buttons (rechts ausgerichtet)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let zoom_enabled = state.view.interaction.zoom;
                if ui.add_enabled(zoom_enabled, egui::Button::new("➖")).clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                }
                if ui.add_enabled(zoom_enabled, egui::Button::new("➕")).clicked() {
                    events.push(AppIntent::ZoomInRequested);
                }
                ui.label("Zoom:");
            });
        });
    });

    events
}
