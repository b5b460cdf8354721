//! Bearbeitungspanel für den Durchmesser des offenen Kreises.
//!
//! Wird am unteren Rand angezeigt, solange am History-Cursor ein offener
//! Kreis steht. Schließen bestätigt den aktuellen Reglerwert.

use crate::app::{AppIntent, AppState};

const PANEL_MIN_HEIGHT: f32 = 120.0;

/// Rendert das Panel (falls sichtbar) und gibt erzeugte Events zurück.
pub fn render_edit_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !state.edit_panel_visible() {
        return events;
    }

    let range = state.options.diameter;
    let mut diameter = state.edit_panel.diameter;

    egui::TopBottomPanel::bottom("edit_panel")
        .resizable(false)
        .min_height(PANEL_MIN_HEIGHT)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(state.edit_panel.title());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✖").on_hover_text("Schließen (Enter/Esc)").clicked() {
                        events.push(AppIntent::EditPanelConfirmed);
                    }
                });
            });
            ui.separator();

            ui.spacing_mut().slider_width = ui.available_width() - 80.0;
            let slider = egui::Slider::new(&mut diameter, range.min..=range.max)
                .step_by(1.0)
                .text("Ø");
            if ui.add(slider).changed() {
                events.push(AppIntent::DiameterChanged { diameter });
            }
        });

    events
}
