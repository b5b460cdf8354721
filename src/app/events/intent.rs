use crate::core::Position;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick auf die Zeichenfläche (Flächen-Koordinaten)
    SurfaceClicked { position: Position },
    /// Zeichenfläche hat eine neue Pixelgröße
    SurfaceResized { size: [f32; 2] },
    /// Durchmesser-Regler bewegt (nur Anzeige, noch nicht festgeschrieben)
    DiameterChanged { diameter: f32 },
    /// Bearbeitungspanel geschlossen → Durchmesser festschreiben
    EditPanelConfirmed,
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Anwendung beenden
    ExitRequested,
}
