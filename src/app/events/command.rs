use crate::core::Position;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen offenen Kreis an `position` anlegen und Panel öffnen
    PlaceCircle { position: Position },
    /// Größe der Zeichenfläche übernehmen
    SetSurfaceSize { size: [f32; 2] },
    /// Arbeits-Durchmesser im Panel setzen (bereits geklemmt)
    SetWorkingDiameter { diameter: f32 },
    /// Offenen Kreis mit dem Arbeits-Durchmesser festschreiben
    ConfirmDiameter,
    /// Cursor der History einen Schritt zurück
    Undo,
    /// Cursor der History einen Schritt vor
    Redo,
    /// Anwendung kontrolliert beenden
    RequestExit,
}
