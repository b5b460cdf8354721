use crate::app::history::{ActionHistory, HistoryCommand, Transition};
use crate::app::{projection, render_scene, CommandLog};
use crate::shared::EditorOptions;

use super::{EditPanelState, ViewState};

/// Hauptzustand einer Zeichen-Session.
///
/// Bündelt History, Panel- und View-Zustand in einem Wert, den nur der
/// `AppController` (über die Handler) verändert.
pub struct AppState {
    /// Undo/Redo-History aller Kreis-Aktionen
    pub history: ActionHistory,
    /// Durchmesser-Panel
    pub edit_panel: EditPanelState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Durchmesser-Bereich, Farben)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut state = Self {
            history: ActionHistory::new(),
            edit_panel: EditPanelState::new(&options.diameter),
            view: ViewState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        };
        state.view.scene = render_scene::build(&state);
        state
    }

    /// Panel ist genau dann sichtbar, wenn am Cursor ein offener Kreis steht.
    pub fn edit_panel_visible(&self) -> bool {
        projection::panel_visible(&self.history)
    }

    /// Undo-Button deaktiviert (Cursor auf -1).
    pub fn undo_disabled(&self) -> bool {
        !self.history.can_undo()
    }

    /// Redo-Button deaktiviert (Cursor auf dem neuesten Eintrag, auch bei leerer History).
    pub fn redo_disabled(&self) -> bool {
        !self.history.can_redo()
    }

    /// Führt einen History-Übergang aus und zieht den abgeleiteten Zustand nach.
    ///
    /// Bei einer wirksamen Änderung: gemeldete Position in den Panel-Titel,
    /// Reglerwert an einen offenen Eintrag am Cursor binden, Szene genau
    /// einmal neu aufbauen. Ein No-op ändert nichts.
    pub fn apply_history(&mut self, command: HistoryCommand) -> Transition {
        let transition = self.history.apply(command);
        if !transition.changed {
            return transition;
        }

        self.history = transition.history.clone();
        if let Some(position) = transition.position {
            self.edit_panel.position = position;
        }
        if let Some(drawing) = projection::current_drawing(&self.history) {
            self.edit_panel.diameter = drawing.diameter();
        }
        self.refresh_scene();

        transition
    }

    /// Baut die Render-Szene komplett neu auf.
    pub fn refresh_scene(&mut self) {
        self.view.scene = render_scene::build(self);
        self.view.redraw_count += 1;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
