use crate::core::{CircleAction, Position};
use std::sync::Arc;

/// Operationen auf der Aktions-History (geschlossene Menge).
#[derive(Debug, Clone)]
pub enum HistoryCommand {
    /// Alles nach dem Cursor verwerfen, Aktion anhängen
    Push(CircleAction),
    /// Cursor einen Schritt zurück
    Undo,
    /// Cursor einen Schritt vor
    Redo,
}

/// Ergebnis eines History-Übergangs.
#[derive(Debug, Clone)]
pub struct Transition {
    /// Neuer History-Wert
    pub history: ActionHistory,
    /// Position, die der Aufrufer als Panel-Titel übernehmen soll
    pub position: Option<Position>,
    /// `false` bei Undo/Redo an der Grenze (No-op)
    pub changed: bool,
}

/// Cursor-indizierte Liste aller Zeichen-Aktionen.
///
/// Werte werden nie in-place verändert: jeder Übergang liefert eine neue
/// `ActionHistory`. Die Einträge liegen hinter einem `Arc` (Copy-on-Write),
/// ein No-op teilt sich daher Speicher und Cursor mit dem Ausgangswert.
///
/// Invariante: `0 <= cursor + 1 <= entries.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionHistory {
    entries: Arc<Vec<CircleAction>>,
    cursor: isize,
}

impl Default for ActionHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionHistory {
    /// Leere History, Cursor auf -1.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Vec::new()),
            cursor: -1,
        }
    }

    /// Reiner Zustandsübergang `(History, Command) -> History`.
    pub fn apply(&self, command: HistoryCommand) -> Transition {
        let (history, position) = match command {
            HistoryCommand::Push(action) => (self.push(action), None),
            HistoryCommand::Undo => self.undo(),
            HistoryCommand::Redo => self.redo(),
        };
        let changed = history != *self;
        Transition {
            history,
            position,
            changed,
        }
    }

    /// Verwirft alle Einträge hinter dem Cursor, hängt `action` an und
    /// setzt den Cursor auf den neuen Eintrag.
    pub fn push(&self, action: CircleAction) -> Self {
        let mut entries = Arc::clone(&self.entries);
        let list = Arc::make_mut(&mut entries);
        list.truncate(self.active_len());
        list.push(action);

        let next = Self {
            entries,
            cursor: self.cursor + 1,
        };
        debug_assert!(next.cursor_in_bounds());
        next
    }

    /// Cursor einen Schritt zurück.
    ///
    /// Liefert die Position des Eintrags am neuen Cursor, aber nur wenn der
    /// alte Cursor nicht 0 war. Wer vom allerersten Eintrag weg rückgängig
    /// macht, bekommt also keine Position.
    pub fn undo(&self) -> (Self, Option<Position>) {
        if self.cursor < 0 {
            return (self.clone(), None);
        }

        let next = Self {
            entries: Arc::clone(&self.entries),
            cursor: self.cursor - 1,
        };
        let position = if self.cursor != 0 {
            next.current().map(CircleAction::position)
        } else {
            None
        };
        (next, position)
    }

    /// Cursor einen Schritt vor.
    ///
    /// Gleiche asymmetrische Regel wie `undo`: die Position des Eintrags am
    /// neuen Cursor wird nur gemeldet, wenn der alte Cursor nicht 0 war.
    /// Von -1 aus wird also gemeldet, von 0 aus nicht.
    pub fn redo(&self) -> (Self, Option<Position>) {
        if !self.can_redo() {
            return (self.clone(), None);
        }

        let next = Self {
            entries: Arc::clone(&self.entries),
            cursor: self.cursor + 1,
        };
        let position = if self.cursor != 0 {
            next.current().map(CircleAction::position)
        } else {
            None
        };
        (next, position)
    }

    /// Alle Einträge, inklusive der per Undo verlassenen.
    pub fn entries(&self) -> &[CircleAction] {
        &self.entries
    }

    /// Index des zuletzt aktiven Eintrags (-1 = nichts aktiv).
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Eintrag am Cursor, falls vorhanden.
    pub fn current(&self) -> Option<&CircleAction> {
        usize::try_from(self.cursor)
            .ok()
            .and_then(|idx| self.entries.get(idx))
    }

    /// Anzahl der Einträge bis einschließlich Cursor.
    pub fn active_len(&self) -> usize {
        usize::try_from(self.cursor + 1).unwrap_or(0)
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor >= 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.active_len() < self.entries.len()
    }

    fn cursor_in_bounds(&self) -> bool {
        self.cursor >= -1 && self.active_len() <= self.entries.len()
    }

    /// Gibt `true` zurück, wenn beide Werte denselben Eintrags-Speicher
    /// teilen (identischer Zustand ohne Vergleich der Einträge).
    #[cfg(test)]
    fn shares_entries_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}
