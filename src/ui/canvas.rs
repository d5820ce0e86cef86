//! Canvas-Painting: Zeichnet Pfad und editierbare Handles einer RenderScene.

use crate::core::HandleSet;
use crate::shared::{EditorOptions, RenderScene};
use glam::Vec2;

/// Zeichnet die komplette Szene (Hintergrund, Pfad, Handles) in `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let opts = &scene.options;
    painter.rect_filled(rect, 0.0, color32(opts.canvas_color));

    let path_stroke = egui::Stroke::new(opts.path_stroke_width, color32(opts.path_color));
    for polyline in &scene.polylines {
        if polyline.len() < 2 {
            continue;
        }
        let points = polyline.iter().map(|&p| to_screen(p, rect)).collect();
        painter.add(egui::Shape::line(points, path_stroke));
    }

    // Reihenfolge = Segment-Index, spätere Handles liegen oben
    for entry in &scene.handles {
        paint_handles(painter, rect, &entry.handles, opts);
    }
}

/// Zeichnet die Handles eines Segments: Hilfslinie, Anker, Steuerpunkte.
fn paint_handles(
    painter: &egui::Painter,
    rect: egui::Rect,
    handles: &HandleSet,
    opts: &EditorOptions,
) {
    if let Some(guide) = handles.guide() {
        let points = guide.iter().map(|&p| to_screen(p, rect)).collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(1.0, color32(opts.guide_color)),
        ));
    }

    let fill = color32(opts.handle_fill_color);
    let stroke = egui::Stroke::new(1.0, color32(opts.handle_stroke_color));

    if let Some(anchor) = handles.anchor() {
        painter.circle(to_screen(anchor, rect), opts.anchor_radius, fill, stroke);
    }

    for control in handles.control_points() {
        let square = egui::Rect::from_center_size(
            to_screen(control, rect),
            egui::Vec2::splat(opts.control_half_size * 2.0),
        );
        painter.rect_filled(square, opts.control_corner_radius, fill);
        painter.rect_stroke(
            square,
            opts.control_corner_radius,
            stroke,
            egui::StrokeKind::Inside,
        );
    }
}

fn to_screen(p: Vec2, rect: egui::Rect) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
}

/// Konvertiert eine RGBA-Farbe `[0..1; 4]` nach egui.
pub(crate) fn color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}
