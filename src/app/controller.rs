//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::FieldScene;
use crate::storage;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Danach: History-Snapshot bei geänderter Revision (nicht während eines
    /// Drags) und Speichern bei geänderter übernommener Sammlung.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Felder ===
            AppCommand::CreateField => handlers::fields::create_field(state),
            AppCommand::AppendPoint { point } => handlers::fields::append_point(state, point),
            AppCommand::FinalizeField => handlers::fields::finalize_field(state),
            AppCommand::DeleteField { id } => handlers::fields::delete_field(state, id),
            AppCommand::ClearAll => handlers::fields::clear_all(state),
            AppCommand::SetEditorMode { mode } => handlers::fields::set_editor_mode(state, mode),
            AppCommand::SetEdgeLength {
                target,
                edge_index,
                length,
            } => handlers::fields::set_edge_length(state, target, edge_index, length),

            // === Eckpunkte ===
            AppCommand::SelectVertex { vertex } => handlers::vertex::select(state, vertex),
            AppCommand::ClearSelection => handlers::vertex::clear_selection(state),
            AppCommand::SetHoveredVertex { vertex } => handlers::vertex::set_hovered(state, vertex),
            AppCommand::StartVertexMove { vertex } => handlers::vertex::start_move(state, vertex),
            AppCommand::DragVertexTo { point } => handlers::vertex::drag_to(state, point),
            AppCommand::CommitVertexMove => handlers::vertex::commit(state),
            AppCommand::InsertVertexAtMidpoint {
                target,
                edge_index,
                point,
            } => handlers::vertex::insert_at_midpoint(state, target, edge_index, point),
            AppCommand::CancelEdit => handlers::vertex::cancel(state),
            AppCommand::DeleteVertex { vertex } => handlers::vertex::delete(state, vertex),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Kamera & Karte ===
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { factor, focus } => {
                handlers::view::zoom_towards(state, factor, focus)
            }
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::MarkMapLoaded => handlers::view::map_loaded(state),
            AppCommand::HandleMapUnmounted => handlers::view::map_unmounted(state),

            // === Standort ===
            AppCommand::RequestLocation => handlers::location::request(state),
            AppCommand::DismissAlert => handlers::location::dismiss_alert(state),

            // === Gespeicherte Karten ===
            AppCommand::OpenSaveMapDialog { field } => {
                handlers::saved_maps::open_dialog(state, field)
            }
            AppCommand::CloseSaveMapDialog => handlers::saved_maps::close_dialog(state),
            AppCommand::SaveMap {
                field,
                name,
                description,
                group,
            } => handlers::saved_maps::save(state, field, &name, &description, &group),
            AppCommand::LoadSavedMap { id } => handlers::saved_maps::load(state, id),
            AppCommand::DeleteSavedMap { id } => handlers::saved_maps::delete(state, id),

            // === System ===
            AppCommand::Tick { now } => handlers::frame::tick(state, now),
            AppCommand::RequestExit => state.should_exit = true,
        }

        self.record_history_if_changed(state);
        self.persist_if_changed(state);

        Ok(())
    }

    /// Zeichnet einen Snapshot auf, wenn sich die Revision geändert hat.
    /// Während eines Drags wird erst nach dem Commit aufgezeichnet.
    fn record_history_if_changed(&self, state: &mut AppState) {
        if state.session.is_dragging() || state.store.revision() == state.recorded_revision {
            return;
        }
        state.record_undo_snapshot();
        state.ui.needs_redraw = true;
    }

    /// Schreibt die übernommene Sammlung, wenn sie sich geändert hat.
    /// Schreibfehler werden geloggt, die Bearbeitung läuft weiter.
    fn persist_if_changed(&self, state: &mut AppState) {
        let revision = state.store.committed_revision();
        if revision == state.persisted_revision {
            return;
        }
        state.persisted_revision = revision;

        match storage::save_fields(state.storage.as_mut(), state.store.fields().values()) {
            Ok(()) => log::debug!("{} Felder gespeichert", state.store.field_count()),
            Err(e) => log::error!("Felder konnten nicht gespeichert werden: {:#}", e),
        }
    }

    /// Baut die Feld-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> FieldScene {
        render_scene::build(state, viewport_size)
    }
}
