//! Properties-Panel (rechte Seitenleiste): Felder, Messwerte, gespeicherte Karten.

use crate::app::{AppIntent, AppState};
use crate::core::{format_area, format_length, Field, FieldTarget, SavedMap};
use std::collections::BTreeMap;

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(240.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Felder");
                ui.separator();

                if let Some(current) = state.store.current() {
                    render_current_field(ui, current, &mut events);
                    ui.separator();
                }

                if state.field_count() == 0 {
                    ui.label("Noch keine Felder");
                }
                for field in state.store.fields().values() {
                    render_committed_field(ui, field, &mut events);
                }

                ui.add_space(12.0);
                ui.heading("Gespeicherte Karten");
                ui.separator();
                render_saved_maps(ui, &state.ui.saved_maps, &mut events);
            });
        });

    events
}

fn render_current_field(ui: &mut egui::Ui, field: &Field, events: &mut Vec<AppIntent>) {
    ui.label(egui::RichText::new("✏ Feld in Arbeit").strong());
    ui.label(format!("Punkte: {}", field.point_count()));
    if field.has_area() {
        render_totals(ui, field);
    }
    render_edge_lengths(ui, field, FieldTarget::Current, events);
}

fn render_committed_field(ui: &mut egui::Ui, field: &Field, events: &mut Vec<AppIntent>) {
    let title = format!("{} ({})", field.id, format_area(field.area));
    egui::CollapsingHeader::new(title)
        .id_salt(field.id)
        .show(ui, |ui| {
            ui.label(format!("Punkte: {}", field.point_count()));
            if field.has_area() {
                render_totals(ui, field);
            }
            render_edge_lengths(ui, field, FieldTarget::Committed(field.id), events);

            ui.horizontal(|ui| {
                if ui.small_button("💾 Als Karte speichern").clicked() {
                    events.push(AppIntent::SaveMapDialogRequested { field: field.id });
                }
                if ui.small_button("✕ Löschen").clicked() {
                    events.push(AppIntent::DeleteFieldRequested { id: field.id });
                }
            });
        });
}

fn render_totals(ui: &mut egui::Ui, field: &Field) {
    ui.label(format!("Fläche: {}", format_area(field.area)));
    ui.label(format!("Umfang: {}", format_length(field.perimeter)));
}

/// Kantenlängen als editierbare Werte.
///
/// Übernahme erst beim Loslassen bzw. Verlassen des Eingabefelds
/// (ein History-Schritt pro Eingabe).
fn render_edge_lengths(
    ui: &mut egui::Ui,
    field: &Field,
    target: FieldTarget,
    events: &mut Vec<AppIntent>,
) {
    // Messwerte laufen beim Zeichnen dem Debounce hinterher
    let edge_count = field.visible_edge_count().min(field.measurements.len());
    if edge_count == 0 {
        return;
    }

    egui::Grid::new(("edge_lengths", target))
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for (edge_index, measurement) in field.measurements[..edge_count].iter().enumerate() {
                ui.label(format!("Kante {}", edge_index + 1));
                if let Some(length) =
                    edge_length_editor(ui, (target, edge_index), measurement.length)
                {
                    events.push(AppIntent::EdgeLengthEdited {
                        target,
                        edge_index,
                        length,
                    });
                }
                ui.end_row();
            }
        });
}

/// Gibt die neue Länge zurück, sobald die Eingabe abgeschlossen ist.
fn edge_length_editor(ui: &mut egui::Ui, key: (FieldTarget, usize), length: f64) -> Option<f64> {
    let id = ui.make_persistent_id(key);
    let mut value = ui.data(|d| d.get_temp::<f64>(id)).unwrap_or(length);

    let response = ui.add(
        egui::DragValue::new(&mut value)
            .speed(0.5)
            .range(0.0..=1.0e7)
            .max_decimals(1)
            .suffix(" m"),
    );
    if response.changed() {
        ui.data_mut(|d| d.insert_temp(id, value));
    }

    if !(response.drag_stopped() || response.lost_focus()) {
        return None;
    }
    ui.data_mut(|d| d.remove::<f64>(id));
    ((value - length).abs() > f64::EPSILON).then_some(value)
}

fn render_saved_maps(ui: &mut egui::Ui, saved_maps: &[SavedMap], events: &mut Vec<AppIntent>) {
    if saved_maps.is_empty() {
        ui.label("Keine gespeicherten Karten");
        return;
    }

    let mut groups: BTreeMap<&str, Vec<&SavedMap>> = BTreeMap::new();
    for map in saved_maps {
        groups.entry(map.group.as_str()).or_default().push(map);
    }

    for (group, maps) in groups {
        let label = if group.is_empty() { "Ohne Gruppe" } else { group };
        egui::CollapsingHeader::new(label)
            .default_open(true)
            .show(ui, |ui| {
                for map in maps {
                    ui.horizontal(|ui| {
                        ui.label(map.name.as_str()).on_hover_text(format!(
                            "{}\n{}\nGespeichert: {}",
                            map.description,
                            format_area(map.field.area),
                            map.created_at.format("%d.%m.%Y %H:%M")
                        ));
                        if ui.small_button("Laden").clicked() {
                            events.push(AppIntent::LoadSavedMapRequested { id: map.id });
                        }
                        if ui.small_button("✕").clicked() {
                            events.push(AppIntent::DeleteSavedMapRequested { id: map.id });
                        }
                    });
                }
            });
    }
}
