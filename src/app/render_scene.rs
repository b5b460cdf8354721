//! Builder für Render-Szenen aus dem AppState.

use super::projection;
use crate::app::AppState;
use crate::shared::{RenderScene, SceneCircle, SceneStyle};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Der offene Kreis (falls vorhanden, immer zuletzt) zeigt den aktuellen
/// Reglerwert des Panels statt des gespeicherten Start-Durchmessers.
pub fn build(state: &AppState) -> RenderScene {
    let circles = projection::project(&state.history)
        .into_iter()
        .map(|mut action| {
            // greift nur beim offenen Kreis, Drawn-Einträge sind eingefroren
            action.set_diameter(state.edit_panel.diameter);
            SceneCircle {
                position: action.position(),
                diameter: action.diameter(),
                highlight: action.highlight(),
            }
        })
        .collect();

    RenderScene {
        surface_size: state.view.surface_size,
        circles,
        style: SceneStyle::from(&state.options),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::handlers::drawing;
    use crate::app::AppState;
    use crate::core::Position;

    #[test]
    fn empty_state_builds_empty_scene() {
        let state = AppState::new();
        let scene = build(&state);
        assert!(scene.is_empty());
    }

    #[test]
    fn open_circle_follows_slider_value() {
        let mut state = AppState::new();
        drawing::place_circle(&mut state, Position::new(50.0, 50.0));
        drawing::set_working_diameter(&mut state, 33.0);

        let scene = build(&state);
        assert_eq!(scene.circles.len(), 1);
        assert_eq!(scene.circles[0].diameter, 33.0);
        assert!(scene.circles[0].highlight);
        // Gespeicherter Eintrag bleibt beim Start-Durchmesser
        assert_eq!(state.history.entries()[0].diameter(), 10.0);
    }

    #[test]
    fn scene_carries_surface_size_and_style() {
        let mut state = AppState::new();
        state.view.surface_size = [640.0, 480.0];
        state.options.stroke_width = 4.0;

        let scene = build(&state);
        assert_eq!(scene.surface_size, [640.0, 480.0]);
        assert_eq!(scene.style.stroke_width, 4.0);
    }
}
