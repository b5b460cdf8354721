//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::Position;

/// Ein zu zeichnender Kreis (nur Umriss, ggf. hervorgehoben gefüllt).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCircle {
    /// Mittelpunkt relativ zur Zeichenfläche
    pub position: Position,
    /// Durchmesser in Pixeln
    pub diameter: f32,
    /// Gerade bearbeiteter Kreis
    pub highlight: bool,
}

impl SceneCircle {
    /// Radius in Pixeln
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }
}

/// Stil-Angaben für einen Frame (statisch aus den Optionen).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    pub stroke_width: f32,
    pub stroke_color: [f32; 4],
    pub highlight_color: [f32; 4],
    pub background_color: [f32; 4],
}

impl From<&EditorOptions> for SceneStyle {
    fn from(options: &EditorOptions) -> Self {
        Self {
            stroke_width: options.stroke_width,
            stroke_color: options.stroke_color,
            highlight_color: options.highlight_color,
            background_color: options.background_color,
        }
    }
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self::from(&EditorOptions::default())
    }
}

/// Read-only Daten für einen Render-Frame.
///
/// Der Renderer löscht die gesamte Fläche und zeichnet `circles` in
/// Reihenfolge neu; spätere Kreise liegen oben.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScene {
    /// Größe der Zeichenfläche in Pixeln [Breite, Höhe]
    pub surface_size: [f32; 2],
    /// Sichtbare Kreise in Zeichenreihenfolge
    pub circles: Vec<SceneCircle>,
    /// Farben und Linienstärke
    pub style: SceneStyle,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas gezeichnet werden muss.
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}
