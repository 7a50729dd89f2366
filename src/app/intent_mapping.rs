//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::EditorMode;
use super::{AppCommand, AppIntent, AppState};
use crate::core::midpoint;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // === Felder ===
        AppIntent::StartNewFieldRequested => with_drag_committed(
            state,
            [
                AppCommand::CreateField,
                AppCommand::SetEditorMode {
                    mode: EditorMode::Draw,
                },
            ],
        ),
        AppIntent::FinalizeFieldRequested => with_drag_committed(
            state,
            [
                AppCommand::FinalizeField,
                AppCommand::SetEditorMode {
                    mode: EditorMode::Edit,
                },
            ],
        ),
        AppIntent::DeleteFieldRequested { id } => {
            with_drag_committed(state, [AppCommand::DeleteField { id }])
        }
        AppIntent::ClearAllRequested => vec![AppCommand::CancelEdit, AppCommand::ClearAll],
        AppIntent::EditorModeChanged { mode } => vec![AppCommand::SetEditorMode { mode }],

        // === History ===
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        // === Karte ===
        AppIntent::MapClicked { point } => {
            if state.editor.is_drawing() {
                vec![AppCommand::AppendPoint { point }]
            } else {
                vec![AppCommand::ClearSelection]
            }
        }
        AppIntent::MapLoaded => vec![AppCommand::MarkMapLoaded],
        AppIntent::MapUnmounted => vec![AppCommand::HandleMapUnmounted],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { factor, focus } => vec![AppCommand::ZoomCamera { factor, focus }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],

        // === Eckpunkte ===
        AppIntent::VertexClicked { vertex } => vec![AppCommand::SelectVertex { vertex }],
        AppIntent::VertexHovered { vertex } => vec![AppCommand::SetHoveredVertex { vertex }],
        AppIntent::VertexDragStarted { vertex } => {
            with_drag_committed(state, [AppCommand::StartVertexMove { vertex }])
        }
        AppIntent::VertexDragged { point } => vec![AppCommand::DragVertexTo { point }],
        AppIntent::VertexDragEnded => vec![AppCommand::CommitVertexMove],
        AppIntent::MidpointDragStarted { target, edge_index } => {
            // Mittelpunkt aus der Live-Punktfolge (ein laufender Drag wird vorher übernommen)
            let edge = state
                .session
                .draft_for(target)
                .and_then(|draft| {
                    let n = draft.len();
                    (n >= 2 && edge_index < n)
                        .then(|| (draft[edge_index], draft[(edge_index + 1) % n]))
                })
                .or_else(|| state.store.field(target).and_then(|f| f.edge(edge_index)));

            match edge {
                Some((a, b)) => with_drag_committed(
                    state,
                    [AppCommand::InsertVertexAtMidpoint {
                        target,
                        edge_index,
                        point: midpoint(a, b),
                    }],
                ),
                None => {
                    log::debug!("Mittelpunkt-Drag: Kante {} existiert nicht", edge_index);
                    Vec::new()
                }
            }
        }
        AppIntent::EdgeLengthEdited {
            target,
            edge_index,
            length,
        } => with_drag_committed(
            state,
            [AppCommand::SetEdgeLength {
                target,
                edge_index,
                length,
            }],
        ),
        AppIntent::DeleteVertexRequested { vertex } => vec![AppCommand::DeleteVertex { vertex }],
        AppIntent::DeleteSelectedVertexRequested => match state.session.selected() {
            Some(vertex) => vec![AppCommand::DeleteVertex { vertex }],
            None => Vec::new(),
        },
        AppIntent::CancelEditRequested => vec![AppCommand::CancelEdit],

        // === Standort ===
        AppIntent::LocateRequested => vec![AppCommand::RequestLocation],
        AppIntent::AlertDismissed => vec![AppCommand::DismissAlert],

        // === Gespeicherte Karten ===
        AppIntent::SaveMapDialogRequested { field } => {
            vec![AppCommand::OpenSaveMapDialog { field }]
        }
        AppIntent::SaveMapDialogClosed => vec![AppCommand::CloseSaveMapDialog],
        AppIntent::SaveMapConfirmed {
            field,
            name,
            description,
            group,
        } => vec![
            AppCommand::SaveMap {
                field,
                name,
                description,
                group,
            },
            AppCommand::CloseSaveMapDialog,
        ],
        AppIntent::LoadSavedMapRequested { id } => {
            with_drag_committed(state, [AppCommand::LoadSavedMap { id }])
        }
        AppIntent::DeleteSavedMapRequested { id } => vec![AppCommand::DeleteSavedMap { id }],

        // === System ===
        AppIntent::FrameTick { now } => vec![AppCommand::Tick { now }],
        AppIntent::ExitRequested => with_drag_committed(state, [AppCommand::RequestExit]),
    }
}

/// Stellt einem laufenden Drag ein explizites Commit voran.
///
/// Der Commit wird damit als eigener History-Schritt aufgezeichnet.
fn with_drag_committed<const N: usize>(
    state: &AppState,
    commands: [AppCommand; N],
) -> Vec<AppCommand> {
    let mut result = Vec::with_capacity(N + 1);
    if state.session.is_dragging() {
        result.push(AppCommand::CommitVertexMove);
    }
    result.extend(commands);
    result
}

#[cfg(test)]
mod tests;
