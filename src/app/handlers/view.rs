//! Handler für die Zeichenfläche.

use crate::app::AppState;

/// Aktualisiert die Größe der Zeichenfläche im State.
pub fn set_surface_size(state: &mut AppState, size: [f32; 2]) {
    if state.view.surface_size == size {
        return;
    }
    state.view.surface_size = size;
    state.refresh_scene();
    log::debug!("Zeichenfläche: {:.0}x{:.0}", size[0], size[1]);
}
