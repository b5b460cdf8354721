use super::Position;

/// Art eines History-Eintrags. Aktuell existiert nur das Kreis-Zeichnen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionKind {
    /// Kreis platzieren bzw. Durchmesser festlegen
    #[default]
    DrawCircle,
}

/// Lebenszyklus eines Eintrags: `Drawing` → `Drawn`, niemals zurück.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Wartet auf Bestätigung des Durchmessers (Panel offen)
    Drawing,
    /// Durchmesser festgeschrieben
    Drawn,
}

/// Ein Eintrag der Aktions-History.
///
/// Die Position ist ab Erstellung fix. Der Durchmesser ist nur im Zustand
/// `Drawing` änderbar, `highlight` ist genau dann gesetzt.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleAction {
    kind: ActionKind,
    position: Position,
    diameter: f32,
    state: LifecycleState,
    highlight: bool,
}

impl CircleAction {
    /// Neuer, noch offener Kreis an `position` mit Start-Durchmesser.
    pub fn drawing(position: Position, diameter: f32) -> Self {
        Self {
            kind: ActionKind::DrawCircle,
            position,
            diameter,
            state: LifecycleState::Drawing,
            highlight: true,
        }
    }

    /// Bereits festgeschriebener Kreis.
    pub fn drawn(position: Position, diameter: f32) -> Self {
        Self {
            kind: ActionKind::DrawCircle,
            position,
            diameter,
            state: LifecycleState::Drawn,
            highlight: false,
        }
    }

    /// Leitet den `Drawn`-Nachfolger dieses offenen Kreises ab
    /// (gleiche Position, Durchmesser eingefroren, Highlight aus).
    ///
    /// Auf einem bereits festgeschriebenen Eintrag ist das ein
    /// Programmierfehler; der Eintrag bleibt dann unverändert.
    pub fn committed(&self, diameter: f32) -> Self {
        debug_assert!(self.is_drawing(), "committed() auf Drawn-Eintrag");
        if !self.is_drawing() {
            return self.clone();
        }
        Self::drawn(self.position, diameter)
    }

    /// Ersetzt den Durchmesser, solange der Eintrag noch offen ist.
    /// Gibt `false` zurück, wenn der Eintrag bereits eingefroren ist.
    pub fn set_diameter(&mut self, diameter: f32) -> bool {
        if !self.is_drawing() {
            return false;
        }
        self.diameter = diameter;
        true
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn highlight(&self) -> bool {
        self.highlight
    }

    /// Gibt `true` zurück, solange der Durchmesser noch nicht bestätigt ist.
    pub fn is_drawing(&self) -> bool {
        self.state == LifecycleState::Drawing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawing_action_is_highlighted() {
        let action = CircleAction::drawing(Position::new(50.0, 50.0), 10.0);
        assert_eq!(action.kind(), ActionKind::DrawCircle);
        assert_eq!(action.state(), LifecycleState::Drawing);
        assert!(action.highlight());
    }

    #[test]
    fn committed_keeps_position_and_freezes_diameter() {
        let action = CircleAction::drawing(Position::new(50.0, 50.0), 10.0);
        let mut done = action.committed(20.0);

        assert_eq!(done.position(), action.position());
        assert_eq!(done.diameter(), 20.0);
        assert_eq!(done.state(), LifecycleState::Drawn);
        assert!(!done.highlight());

        assert!(!done.set_diameter(35.0));
        assert_eq!(done.diameter(), 20.0);
    }

    #[test]
    fn drawing_diameter_stays_mutable() {
        let mut action = CircleAction::drawing(Position::new(1.0, 2.0), 10.0);
        assert!(action.set_diameter(42.0));
        assert_eq!(action.diameter(), 42.0);
    }
}
