use crate::shared::RenderScene;

/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Aktuelle Größe der Zeichenfläche in Pixeln
    pub surface_size: [f32; 2],
    /// Zuletzt gebaute Szene, wird vom Host jeden Frame gezeichnet
    pub scene: RenderScene,
    /// Anzahl der Neuaufbauten der Szene (genau einer pro wirksamer Änderung)
    pub redraw_count: u64,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            surface_size: [0.0, 0.0],
            scene: RenderScene::default(),
            redraw_count: 0,
        }
    }
}
