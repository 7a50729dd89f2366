use crate::app::{AppCommand, AppController, AppIntent, AppState, EditorMode};
use crate::core::{FieldTarget, GeoPoint, VertexRef};

use super::map_intent_to_commands;

fn drawing_state_with_two_points() -> AppState {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::StartNewFieldRequested)
        .unwrap();
    for lng in [0.0, 0.001] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::MapClicked {
                    point: GeoPoint::new(0.0, lng),
                },
            )
            .unwrap();
    }
    state
}

#[test]
fn start_new_field_creates_and_switches_to_draw_mode() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::StartNewFieldRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::CreateField));
    assert!(matches!(
        commands[1],
        AppCommand::SetEditorMode {
            mode: EditorMode::Draw
        }
    ));
}

#[test]
fn map_click_appends_only_in_draw_mode() {
    let mut state = AppState::new();
    let point = GeoPoint::new(1.0, 2.0);

    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { point });
    assert!(matches!(commands[..], [AppCommand::ClearSelection]));

    state.editor.mode = EditorMode::Draw;
    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { point });
    assert!(matches!(commands[..], [AppCommand::AppendPoint { .. }]));
}

#[test]
fn midpoint_drag_uses_edge_midpoint() {
    let state = drawing_state_with_two_points();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MidpointDragStarted {
            target: FieldTarget::Current,
            edge_index: 0,
        },
    );

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::InsertVertexAtMidpoint {
            target,
            edge_index,
            point,
        } => {
            assert_eq!(*target, FieldTarget::Current);
            assert_eq!(*edge_index, 0);
            assert_eq!(*point, GeoPoint::new(0.0, 0.0005));
        }
        other => panic!("unerwarteter Command: {:?}", other),
    }
}

#[test]
fn midpoint_drag_on_missing_edge_maps_to_nothing() {
    let state = drawing_state_with_two_points();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MidpointDragStarted {
            target: FieldTarget::Current,
            edge_index: 5,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn drag_start_while_dragging_commits_first() {
    let mut controller = AppController::new();
    let mut state = drawing_state_with_two_points();
    let first = VertexRef::new(FieldTarget::Current, 0);
    controller
        .handle_intent(&mut state, AppIntent::VertexDragStarted { vertex: first })
        .unwrap();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::VertexDragStarted {
            vertex: VertexRef::new(FieldTarget::Current, 1),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::CommitVertexMove));
    assert!(matches!(commands[1], AppCommand::StartVertexMove { .. }));
}

#[test]
fn delete_selected_without_selection_maps_to_nothing() {
    let state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::DeleteSelectedVertexRequested);
    assert!(commands.is_empty());
}

#[test]
fn save_map_confirmed_saves_and_closes_dialog() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SaveMapConfirmed {
            field: crate::core::FieldId(1),
            name: "Acker".to_string(),
            description: String::new(),
            group: String::new(),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::SaveMap { .. }));
    assert!(matches!(commands[1], AppCommand::CloseSaveMapDialog));
}
