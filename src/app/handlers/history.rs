//! Handler für Undo/Redo-Operationen.

use crate::app::history::HistoryCommand;
use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    let transition = state.apply_history(HistoryCommand::Undo);
    if transition.changed {
        log::info!("Undo ausgeführt (Cursor {})", state.history.cursor());
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    let transition = state.apply_history(HistoryCommand::Redo);
    if transition.changed {
        log::info!("Redo ausgeführt (Cursor {})", state.history.cursor());
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
