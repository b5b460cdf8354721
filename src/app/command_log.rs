//! Verlauf der zuletzt ausgeführten Commands samt Wirkung.
//!
//! Die Status-Bar zeigt den jüngsten Eintrag an, damit wirkungslose
//! Undo/Redo-Versuche sichtbar werden.

use std::collections::VecDeque;

use super::AppCommand;

/// Ein ausgeführter Command mit dem Zustand direkt danach.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    pub command: AppCommand,
    /// History-Cursor nach der Ausführung
    pub cursor: isize,
    /// Szene wurde neu aufgebaut
    pub redrawn: bool,
}

impl LoggedCommand {
    /// Kurzbeschreibung für die Status-Bar, z.B. `Undo → Cursor 1`.
    pub fn summary(&self) -> String {
        let name = match &self.command {
            AppCommand::PlaceCircle { position } => format!("Kreis bei {}", position),
            AppCommand::SetSurfaceSize { .. } => "Flächengröße".to_string(),
            AppCommand::SetWorkingDiameter { diameter } => format!("Ø {:.0}", diameter),
            AppCommand::ConfirmDiameter => "Bestätigen".to_string(),
            AppCommand::Undo => "Undo".to_string(),
            AppCommand::Redo => "Redo".to_string(),
            AppCommand::RequestExit => "Beenden".to_string(),
        };
        if self.redrawn {
            format!("{} → Cursor {}", name, self.cursor)
        } else {
            format!("{} (ohne Wirkung)", name)
        }
    }
}

/// Ringpuffer der letzten `CAPACITY` Commands.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
}

impl CommandLog {
    const CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    /// Hängt einen Eintrag an; bei vollem Puffer fällt der älteste heraus.
    pub fn record(&mut self, command: AppCommand, cursor: isize, redrawn: bool) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedCommand {
            command,
            cursor,
            redrawn,
        });
    }

    /// Jüngster Eintrag.
    pub fn last(&self) -> Option<&LoggedCommand> {
        self.entries.back()
    }

    /// Einträge vom ältesten zum jüngsten.
    pub fn iter(&self) -> impl Iterator<Item = &LoggedCommand> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
