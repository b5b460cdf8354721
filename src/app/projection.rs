//! Projektion der History auf die aktuell sichtbaren Kreise.

use super::history::ActionHistory;
use crate::core::CircleAction;

/// Berechnet die geordnete Liste der sichtbaren Kreise.
///
/// 1. Alle `Drawn`-Einträge bis einschließlich Cursor, in Index-Reihenfolge.
/// 2. Ist der Eintrag am Cursor noch `Drawing`, kommt er als letzter dazu
///    (liegt damit über den festgeschriebenen Kreisen).
///
/// Wird bei jeder Änderung komplett neu berechnet.
pub fn project(history: &ActionHistory) -> Vec<CircleAction> {
    let active = &history.entries()[..history.active_len()];

    let mut visible: Vec<CircleAction> = active
        .iter()
        .filter(|action| !action.is_drawing())
        .cloned()
        .collect();

    if let Some(drawing) = current_drawing(history) {
        visible.push(drawing.clone());
    }

    visible
}

/// Offener Eintrag am Cursor, falls vorhanden.
pub fn current_drawing(history: &ActionHistory) -> Option<&CircleAction> {
    history.current().filter(|action| action.is_drawing())
}

/// Das Durchmesser-Panel ist genau dann sichtbar, wenn am Cursor ein
/// offener Eintrag steht.
pub fn panel_visible(history: &ActionHistory) -> bool {
    current_drawing(history).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LifecycleState, Position};

    fn circle_history() -> ActionHistory {
        ActionHistory::new()
            .push(CircleAction::drawing(Position::new(10.0, 10.0), 10.0))
            .push(CircleAction::drawn(Position::new(10.0, 10.0), 20.0))
            .push(CircleAction::drawing(Position::new(30.0, 30.0), 10.0))
    }

    #[test]
    fn empty_history_projects_nothing() {
        let history = ActionHistory::new();
        assert!(project(&history).is_empty());
        assert!(!panel_visible(&history));
    }

    #[test]
    fn drawing_entry_is_last_and_only_once() {
        let history = circle_history();
        let visible = project(&history);

        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].state(), LifecycleState::Drawn);
        assert_eq!(visible[1].position(), Position::new(30.0, 30.0));
        assert!(visible[1].is_drawing());
        assert!(panel_visible(&history));
    }

    #[test]
    fn drawing_entries_before_cursor_are_hidden() {
        let history = circle_history().push(CircleAction::drawn(Position::new(30.0, 30.0), 7.0));
        let visible = project(&history);

        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|action| !action.is_drawing()));
        assert!(!panel_visible(&history));
    }

    #[test]
    fn drawn_entries_after_cursor_are_hidden() {
        let history = circle_history()
            .push(CircleAction::drawn(Position::new(30.0, 30.0), 7.0))
            .undo()
            .0
            .undo()
            .0;
        assert_eq!(history.cursor(), 1);

        let visible = project(&history);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].diameter(), 20.0);
    }

    #[test]
    fn drawing_entry_on_top_even_with_lower_index() {
        // Drawing bei Index 0, danach nur Drawn-Einträge hinter dem Cursor
        let history = ActionHistory::new()
            .push(CircleAction::drawing(Position::new(1.0, 1.0), 10.0))
            .push(CircleAction::drawn(Position::new(1.0, 1.0), 4.0))
            .undo()
            .0;

        let visible = project(&history);
        assert_eq!(visible.len(), 1);
        assert!(visible[0].highlight());
    }
}
