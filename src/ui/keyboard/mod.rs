//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Zustand, von dem die Shortcuts abhängen.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct KeyboardContext {
    /// Ein Eckpunkt ist ausgewählt
    pub has_selection: bool,
    /// Ein Feld ist in Arbeit
    pub has_current: bool,
    /// Ein Drag läuft
    pub dragging: bool,
}

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld den Fokus hat, werden keine Shortcuts ausgelöst.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, ctx: KeyboardContext) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Escape, Delete, Enter, Zoom (+/-)
    let (
        key_escape_pressed,
        key_del_pressed,
        key_enter_pressed,
        key_plus_pressed,
        key_minus_pressed,
    ) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
        )
    });

    // Escape: laufenden Drag verwerfen bzw. Auswahl aufheben
    if key_escape_pressed && (ctx.dragging || ctx.has_selection) {
        events.push(AppIntent::CancelEditRequested);
    }

    if key_del_pressed && ctx.has_selection {
        events.push(AppIntent::DeleteSelectedVertexRequested);
    }

    if key_enter_pressed && ctx.has_current {
        events.push(AppIntent::FinalizeFieldRequested);
    }

    if key_plus_pressed && !modifiers.command {
        events.push(AppIntent::ZoomInRequested);
    }
    if key_minus_pressed && !modifiers.command {
        events.push(AppIntent::ZoomOutRequested);
    }

    events
}

#[cfg(test)]
mod tests;
