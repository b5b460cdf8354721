//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SurfaceClicked { position } => {
            // Panel ist modal: solange ein Kreis offen ist, zählen Klicks nicht
            if state.edit_panel_visible() {
                log::debug!("Klick bei {} ignoriert: Panel offen", position);
                Vec::new()
            } else {
                vec![AppCommand::PlaceCircle { position }]
            }
        }
        AppIntent::SurfaceResized { size } => vec![AppCommand::SetSurfaceSize { size }],
        AppIntent::DiameterChanged { diameter } => {
            if state.edit_panel_visible() {
                let diameter = state.options.diameter.clamp(diameter);
                vec![AppCommand::SetWorkingDiameter { diameter }]
            } else {
                log::debug!("Durchmesser-Änderung ohne offenes Panel ignoriert");
                Vec::new()
            }
        }
        AppIntent::EditPanelConfirmed => vec![AppCommand::ConfirmDiameter],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn click_maps_to_place_circle_when_panel_hidden() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::SurfaceClicked {
                position: Position::new(5.0, 6.0),
            },
        );
        assert_eq!(
            commands,
            vec![AppCommand::PlaceCircle {
                position: Position::new(5.0, 6.0)
            }]
        );
    }

    #[test]
    fn click_is_dropped_while_panel_open() {
        let mut state = AppState::new();
        crate::app::handlers::drawing::place_circle(&mut state, Position::new(1.0, 1.0));
        assert!(state.edit_panel_visible());

        let commands = map_intent_to_commands(
            &state,
            AppIntent::SurfaceClicked {
                position: Position::new(9.0, 9.0),
            },
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn diameter_change_is_clamped() {
        let mut state = AppState::new();
        crate::app::handlers::drawing::place_circle(&mut state, Position::new(1.0, 1.0));

        let commands =
            map_intent_to_commands(&state, AppIntent::DiameterChanged { diameter: 500.0 });
        assert_eq!(
            commands,
            vec![AppCommand::SetWorkingDiameter { diameter: 50.0 }]
        );
    }

    #[test]
    fn diameter_change_without_panel_is_dropped() {
        let state = AppState::new();
        let commands =
            map_intent_to_commands(&state, AppIntent::DiameterChanged { diameter: 20.0 });
        assert!(commands.is_empty());
    }
}
