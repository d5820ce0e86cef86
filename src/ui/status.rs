//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Segmente: {}", state.segment_count()));

            ui.separator();

            match state.last_segment_kind() {
                Some(kind) => ui.label(format!("Letztes Segment: {}", kind.label())),
                None => ui.label("Klicken setzt den Startpunkt"),
            };

            ui.separator();

            if let Some(sample) = &state.live_drag {
                let mode = if sample.is_drag(state.options.drag_threshold) {
                    "Kurve ziehen"
                } else {
                    "Punkt setzen"
                };
                ui.label(format!(
                    "{} | Anker: ({:.1}, {:.1})",
                    mode, sample.start_location.x, sample.start_location.y
                ));
            } else {
                ui.label("Klick = Linie | Ziehen = Kurve | Esc = Abbrechen");
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
