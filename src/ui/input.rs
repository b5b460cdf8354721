//! Input-Handling der Zeichenfläche: Klicks und Größe → AppIntent.

use super::keyboard;
use crate::app::{AppIntent, AppState, Position};

/// Sammelt Events der Zeichenfläche aus egui-Input.
///
/// Klickpositionen werden relativ zur linken oberen Ecke von
/// `response.rect` gemeldet. Eine geänderte Flächengröße wird als
/// `SurfaceResized` gemeldet, bevor ein Klick verarbeitet wird.
pub fn collect_surface_events(
    ui: &egui::Ui,
    response: &egui::Response,
    state: &AppState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let rect = response.rect;
    let size = [rect.width(), rect.height()];
    if size != state.view.surface_size {
        events.push(AppIntent::SurfaceResized { size });
    }

    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            events.push(AppIntent::SurfaceClicked {
                position: surface_position(pointer_pos, rect),
            });
        }
    }

    events.extend(keyboard::collect_keyboard_intents(
        ui,
        state.edit_panel_visible(),
    ));

    events
}

/// Rechnet eine Bildschirmposition in Flächen-Koordinaten um.
pub fn surface_position(pointer_pos: egui::Pos2, rect: egui::Rect) -> Position {
    let local = pointer_pos - rect.min;
    Position::new(local.x, local.y)
}
