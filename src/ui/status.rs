//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let visible = state.view.scene.circles.len();
            ui.label(format!("Kreise: {}", visible));

            ui.separator();

            ui.label(format!(
                "History: {} Einträge | Cursor: {}",
                state.history.len(),
                state.history.cursor()
            ));

            ui.separator();

            let [width, height] = state.view.surface_size;
            ui.label(format!("Fläche: {:.0}x{:.0}", width, height));

            if let Some(last) = state.command_log.last() {
                ui.separator();
                ui.label(format!("Zuletzt: {}", last.summary()));
            }
        });
    });
}
