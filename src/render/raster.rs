//! CPU-Rasterisierung einer `RenderScene` in ein `image::RgbaImage`.

use super::channel_u8;
use crate::shared::{RenderScene, SceneCircle};
use image::{Rgba, RgbaImage};

fn rgba(color: [f32; 4]) -> Rgba<u8> {
    Rgba(color.map(channel_u8))
}

/// Zeichnet die Szene in ein neues Bild der Größe `surface_size`.
///
/// Die Fläche wird mit der Hintergrundfarbe gelöscht, danach werden alle
/// Kreise in Reihenfolge gezeichnet (Umriss als Ring mit `stroke_width`,
/// hervorgehobene Kreise zusätzlich gefüllt).
pub fn rasterize(scene: &RenderScene) -> RgbaImage {
    let width = scene.surface_size[0].max(0.0).round() as u32;
    let height = scene.surface_size[1].max(0.0).round() as u32;
    let mut image = RgbaImage::from_pixel(width, height, rgba(scene.style.background_color));

    for circle in &scene.circles {
        paint_circle(&mut image, circle, scene);
    }

    image
}

fn paint_circle(image: &mut RgbaImage, circle: &SceneCircle, scene: &RenderScene) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }

    let style = &scene.style;
    let stroke = rgba(style.stroke_color);
    let fill = rgba(style.highlight_color);
    let half_stroke = (style.stroke_width / 2.0).max(0.5);

    let center = circle.position.to_vec2();
    let radius = circle.radius();
    let outer = radius + half_stroke;
    let inner = (radius - half_stroke).max(0.0);

    // Nur die Bounding-Box des Kreises abtasten
    let min_x = (center.x - outer).floor().max(0.0) as u32;
    let min_y = (center.y - outer).floor().max(0.0) as u32;
    let max_x = ((center.x + outer).ceil().max(0.0) as u32).min(image.width() - 1);
    let max_y = ((center.y + outer).ceil().max(0.0) as u32).min(image.height() - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let sample = glam::Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let distance = sample.distance(center);
            if distance >= inner && distance <= outer {
                image.put_pixel(x, y, stroke);
            } else if circle.highlight && distance < inner {
                image.put_pixel(x, y, fill);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;
    use crate::shared::SceneStyle;

    fn scene_with(circles: Vec<SceneCircle>) -> RenderScene {
        RenderScene {
            surface_size: [100.0, 100.0],
            circles,
            style: SceneStyle::default(),
        }
    }

    #[test]
    fn empty_scene_is_cleared_to_background() {
        let image = rasterize(&scene_with(Vec::new()));
        assert_eq!(image.dimensions(), (100, 100));
        let background = rgba(SceneStyle::default().background_color);
        assert!(image.pixels().all(|p| *p == background));
    }

    #[test]
    fn outline_is_painted_at_radius() {
        let image = rasterize(&scene_with(vec![SceneCircle {
            position: Position::new(50.0, 50.0),
            diameter: 20.0,
            highlight: false,
        }]));
        let stroke = rgba(SceneStyle::default().stroke_color);
        let background = rgba(SceneStyle::default().background_color);

        // Pixelmitte (59.5, 49.5) liegt ~9.5 vom Zentrum entfernt → auf dem Ring
        assert_eq!(*image.get_pixel(59, 49), stroke);
        // Zentrum bleibt leer (nur Umriss)
        assert_eq!(*image.get_pixel(50, 50), background);
        // Weit außerhalb bleibt leer
        assert_eq!(*image.get_pixel(90, 90), background);
    }

    #[test]
    fn highlighted_circle_is_filled() {
        let image = rasterize(&scene_with(vec![SceneCircle {
            position: Position::new(50.0, 50.0),
            diameter: 20.0,
            highlight: true,
        }]));
        assert_eq!(
            *image.get_pixel(50, 50),
            rgba(SceneStyle::default().highlight_color)
        );
    }

    #[test]
    fn circle_near_edge_is_clipped() {
        let image = rasterize(&scene_with(vec![SceneCircle {
            position: Position::new(0.0, 0.0),
            diameter: 50.0,
            highlight: true,
        }]));
        assert_eq!(image.dimensions(), (100, 100));
    }

    #[test]
    fn zero_sized_surface_yields_empty_image() {
        let mut scene = scene_with(vec![SceneCircle {
            position: Position::new(5.0, 5.0),
            diameter: 4.0,
            highlight: false,
        }]);
        scene.surface_size = [0.0, 0.0];
        let image = rasterize(&scene);
        assert_eq!(image.dimensions(), (0, 0));
    }
}
