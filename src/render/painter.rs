use super::color32;
use crate::shared::RenderScene;

/// Zeichnet die Szene in `rect` (löschen + komplett neu zeichnen).
///
/// Kreis-Positionen sind relativ zur linken oberen Ecke von `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let style = &scene.style;
    painter.rect_filled(rect, 0.0, color32(style.background_color));

    let stroke = egui::Stroke::new(style.stroke_width, color32(style.stroke_color));
    let highlight_fill = color32(style.highlight_color);

    for circle in &scene.circles {
        let center = rect.min + egui::vec2(circle.position.x(), circle.position.y());
        if circle.highlight {
            painter.circle(center, circle.radius(), highlight_fill, stroke);
        } else {
            painter.circle_stroke(center, circle.radius(), stroke);
        }
    }
}
