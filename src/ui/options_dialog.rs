//! Optionen-Dialog für Drag-Schwelle, Farben und Handle-Größen.

use crate::app::{AppIntent, AppState};
use crate::shared::options::{
    ANCHOR_RADIUS_RANGE, CONTROL_HALF_SIZE_RANGE, DRAG_THRESHOLD_RANGE,
    FLATTEN_SEGMENT_LENGTH_RANGE, PATH_STROKE_WIDTH_RANGE,
};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Eingabe ─────────────────────────────────────────
            ui.collapsing("Eingabe", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Drag-Schwelle:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.drag_threshold)
                                .range(DRAG_THRESHOLD_RANGE)
                                .speed(0.1),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Kurven-Abtastung:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.flatten_segment_length)
                                .range(FLATTEN_SEGMENT_LENGTH_RANGE)
                                .speed(0.05),
                        )
                        .changed();
                });
            });

            // ── Pfad ────────────────────────────────────────────
            ui.collapsing("Pfad", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Linienstärke:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.path_stroke_width)
                                .range(PATH_STROKE_WIDTH_RANGE)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Pfadfarbe:", &mut opts.path_color);
                changed |= color_edit(ui, "Hintergrund:", &mut opts.canvas_color);
            });

            // ── Handles ─────────────────────────────────────────
            ui.collapsing("Handles", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Anker-Radius:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.anchor_radius)
                                .range(ANCHOR_RADIUS_RANGE)
                                .speed(0.1),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Steuerpunkt-Größe:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.control_half_size)
                                .range(CONTROL_HALF_SIZE_RANGE)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Füllung:", &mut opts.handle_fill_color);
                changed |= color_edit(ui, "Rand:", &mut opts.handle_stroke_color);
                changed |= color_edit(ui, "Hilfslinie:", &mut opts.guide_color);
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::canvas::color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
