use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(event: egui::Event, context: KeyboardContext) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.modifiers = match &event {
        egui::Event::Key { modifiers, .. } => *modifiers,
        _ => egui::Modifiers::default(),
    };
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, context);
        });
    });

    events
}

#[test]
fn test_ctrl_z_emits_undo() {
    let events = collect_with_key_event(
        key_event(egui::Key::Z, egui::Modifiers::COMMAND),
        KeyboardContext::default(),
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::UndoRequested)));
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
}

#[test]
fn test_ctrl_shift_z_emits_redo() {
    let events = collect_with_key_event(
        key_event(
            egui::Key::Z,
            egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
        ),
        KeyboardContext::default(),
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::UndoRequested)));
}

#[test]
fn test_delete_requires_selection() {
    let without = collect_with_key_event(
        key_event(egui::Key::Delete, egui::Modifiers::default()),
        KeyboardContext::default(),
    );
    assert!(without.is_empty());

    let with = collect_with_key_event(
        key_event(egui::Key::Delete, egui::Modifiers::default()),
        KeyboardContext {
            has_selection: true,
            ..KeyboardContext::default()
        },
    );
    assert!(with
        .iter()
        .any(|event| matches!(event, AppIntent::DeleteSelectedVertexRequested)));
}

#[test]
fn test_escape_cancels_running_drag() {
    let events = collect_with_key_event(
        key_event(egui::Key::Escape, egui::Modifiers::default()),
        KeyboardContext {
            dragging: true,
            ..KeyboardContext::default()
        },
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::CancelEditRequested)));
}

#[test]
fn test_enter_finalizes_only_with_current_field() {
    let idle = collect_with_key_event(
        key_event(egui::Key::Enter, egui::Modifiers::default()),
        KeyboardContext::default(),
    );
    assert!(idle.is_empty());

    let drawing = collect_with_key_event(
        key_event(egui::Key::Enter, egui::Modifiers::default()),
        KeyboardContext {
            has_current: true,
            ..KeyboardContext::default()
        },
    );
    assert!(drawing
        .iter()
        .any(|event| matches!(event, AppIntent::FinalizeFieldRequested)));
}
