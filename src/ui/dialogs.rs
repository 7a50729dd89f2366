//! Modale Fenster: Hinweis-Meldung und Karte-Speichern-Dialog.

use crate::app::{AppIntent, UiState};

/// Zeigt die sichtbare Meldung (z.B. Ortungsfehler) als Fenster.
pub fn show_alert_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = ui_state.alert.as_deref() else {
        return events;
    };

    egui::Window::new("Hinweis")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(message);
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    events.push(AppIntent::AlertDismissed);
                }
            });
        });

    events
}

/// Zeigt den Dialog zum Speichern eines Feldes als benannte Karte.
///
/// Die Texteingaben leben im `UiState` und werden direkt bearbeitet;
/// Speichern und Schließen laufen über Intents.
pub fn show_save_map_dialog(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let dialog = &mut ui_state.save_dialog;
    if !dialog.visible {
        return events;
    }
    let Some(field) = dialog.field else {
        events.push(AppIntent::SaveMapDialogClosed);
        return events;
    };

    egui::Window::new("Karte speichern")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("save_map_form")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut dialog.name);
                    ui.end_row();

                    ui.label("Gruppe:");
                    ui.text_edit_singleline(&mut dialog.group);
                    ui.end_row();

                    ui.label("Beschreibung:");
                    ui.text_edit_multiline(&mut dialog.description);
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let can_save = !dialog.name.trim().is_empty();
                if ui
                    .add_enabled(can_save, egui::Button::new("Speichern"))
                    .clicked()
                {
                    events.push(AppIntent::SaveMapConfirmed {
                        field,
                        name: dialog.name.clone(),
                        description: dialog.description.clone(),
                        group: dialog.group.clone(),
                    });
                }
                if ui.button("Abbrechen").clicked() {
                    events.push(AppIntent::SaveMapDialogClosed);
                }
            });
        });

    events
}
