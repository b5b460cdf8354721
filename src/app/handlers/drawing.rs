//! Handler für das Platzieren und Festschreiben von Kreisen.

use crate::app::history::HistoryCommand;
use crate::app::projection;
use crate::app::AppState;
use crate::core::{CircleAction, Position};

/// Legt einen offenen Kreis an `position` an und öffnet damit das Panel.
pub fn place_circle(state: &mut AppState, position: Position) {
    let action = CircleAction::drawing(position, state.options.diameter.default);
    state.edit_panel.position = position;
    state.apply_history(HistoryCommand::Push(action));
    log::info!(
        "Kreis bei {} platziert (History: {} Einträge)",
        position,
        state.history.len()
    );
}

/// Übernimmt einen Reglerwert als Anzeige für den offenen Kreis.
///
/// Die History bleibt unverändert; nur die Szene wird neu aufgebaut.
pub fn set_working_diameter(state: &mut AppState, diameter: f32) {
    if state.edit_panel.diameter == diameter {
        return;
    }
    state.edit_panel.diameter = diameter;
    state.refresh_scene();
}

/// Schreibt den offenen Kreis am Cursor mit dem aktuellen Reglerwert fest.
///
/// Legt dafür einen zweiten History-Eintrag (`Drawn`) an, sodass Öffnen und
/// Bestätigen getrennt rückgängig gemacht werden können.
pub fn confirm_diameter(state: &mut AppState) {
    let Some(drawing) = projection::current_drawing(&state.history) else {
        log::debug!("Bestätigen: kein offener Kreis am Cursor");
        return;
    };

    let diameter = state.edit_panel.diameter;
    let committed = drawing.committed(diameter);
    state.apply_history(HistoryCommand::Push(committed));
    state.edit_panel.diameter = state.options.diameter.default;
    log::info!(
        "Durchmesser {} für Kreis bei {} festgeschrieben",
        diameter,
        state.edit_panel.position
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LifecycleState;

    #[test]
    fn place_circle_opens_panel_with_default_diameter() {
        let mut state = AppState::new();
        place_circle(&mut state, Position::new(12.0, 34.0));

        assert!(state.edit_panel_visible());
        assert_eq!(state.edit_panel.position, Position::new(12.0, 34.0));
        assert_eq!(state.edit_panel.diameter, 10.0);
        assert_eq!(state.history.cursor(), 0);
    }

    #[test]
    fn confirm_pushes_second_entry_and_resets_slider() {
        let mut state = AppState::new();
        place_circle(&mut state, Position::new(12.0, 34.0));
        set_working_diameter(&mut state, 27.0);
        confirm_diameter(&mut state);

        assert_eq!(state.history.len(), 2);
        let last = &state.history.entries()[1];
        assert_eq!(last.state(), LifecycleState::Drawn);
        assert_eq!(last.diameter(), 27.0);
        assert_eq!(last.position(), Position::new(12.0, 34.0));
        assert_eq!(state.edit_panel.diameter, 10.0);
        assert!(!state.edit_panel_visible());
    }

    #[test]
    fn confirm_without_open_circle_is_noop() {
        let mut state = AppState::new();
        confirm_diameter(&mut state);
        assert!(state.history.is_empty());
        assert_eq!(state.view.redraw_count, 0);
    }

    #[test]
    fn slider_change_rebuilds_scene_without_history_change() {
        let mut state = AppState::new();
        place_circle(&mut state, Position::new(1.0, 1.0));
        let history_before = state.history.clone();
        let redraws = state.view.redraw_count;

        set_working_diameter(&mut state, 40.0);

        assert_eq!(state.history, history_before);
        assert_eq!(state.view.redraw_count, redraws + 1);
        assert_eq!(state.view.scene.circles[0].diameter, 40.0);
    }
}
