//! Rendering der Kreis-Szene: egui-Painter für den Bildschirm,
//! CPU-Rasterisierung für Tests und Benchmarks.

mod painter;
pub mod raster;

pub use crate::shared::{RenderScene, SceneCircle};
pub use painter::paint_scene;
pub use raster::rasterize;

/// Wandelt eine RGBA-Farbe (0.0–1.0) in eine egui-Farbe.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(channel_u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Wandelt einen Farbkanal (0.0–1.0) in 0–255.
pub(crate) fn channel_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
