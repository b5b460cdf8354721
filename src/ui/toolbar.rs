//! Toolbar mit Undo/Redo.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!state.undo_disabled(), egui::Button::new("↶ Undo"))
                .on_hover_text("Ctrl+Z")
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }

            if ui
                .add_enabled(!state.redo_disabled(), egui::Button::new("↷ Redo"))
                .on_hover_text("Ctrl+Y / Ctrl+Shift+Z")
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }
        });
    });

    events
}
