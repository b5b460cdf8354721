use crate::core::Position;
use crate::shared::DiameterRange;

/// Zustand des Durchmesser-Panels.
///
/// Die Sichtbarkeit wird nicht gespeichert, sondern aus dem Eintrag am
/// History-Cursor abgeleitet (`AppState::edit_panel_visible`).
#[derive(Debug, Clone, PartialEq)]
pub struct EditPanelState {
    /// Position für den Panel-Titel
    pub position: Position,
    /// Aktueller Reglerwert (erst beim Bestätigen festgeschrieben)
    pub diameter: f32,
}

impl EditPanelState {
    /// Erstellt den Startzustand mit dem Default-Durchmesser.
    pub fn new(range: &DiameterRange) -> Self {
        Self {
            position: Position::default(),
            diameter: range.default,
        }
    }

    /// Titelzeile des Panels.
    pub fn title(&self) -> String {
        format!("Adjust diameter of Circle at {}", self.position)
    }
}
