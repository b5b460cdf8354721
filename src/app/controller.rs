//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
///
/// Jedes Intent wird vollständig abgearbeitet (History → Projektion →
/// Szene), bevor das nächste verarbeitet wird.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        let logged = command.clone();
        let redraws_before = state.view.redraw_count;

        match command {
            // === Zeichnen ===
            AppCommand::PlaceCircle { position } => {
                handlers::drawing::place_circle(state, position)
            }
            AppCommand::SetWorkingDiameter { diameter } => {
                handlers::drawing::set_working_diameter(state, diameter)
            }
            AppCommand::ConfirmDiameter => handlers::drawing::confirm_diameter(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Zeichenfläche ===
            AppCommand::SetSurfaceSize { size } => handlers::view::set_surface_size(state, size),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        let redrawn = state.view.redraw_count != redraws_before;
        let cursor = state.history.cursor();
        state.command_log.record(logged, cursor, redrawn);

        Ok(())
    }
}
