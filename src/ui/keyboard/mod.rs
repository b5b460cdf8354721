//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

#[cfg(test)]
mod tests;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, edit_panel_visible: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed, key_q_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
            i.key_pressed(egui::Key::Q),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    if modifiers.command && key_q_pressed {
        events.push(AppIntent::ExitRequested);
    }

    // Enter / Escape schließen das Panel und bestätigen den Durchmesser
    let (key_enter_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if edit_panel_visible && (key_enter_pressed || key_escape_pressed) {
        events.push(AppIntent::EditPanelConfirmed);
    }

    events
}
