//! Handler für das Zeichnen: Live-Vorschau und Commit von Drag-Gesten.

use crate::app::AppState;
use crate::core::DragSample;

/// Setzt das Vorschau-Sample der laufenden Geste.
///
/// Der committete Pfad bleibt unverändert; die Vorschau wird erst beim
/// Bauen der Render-Szene mit dem Pfad kombiniert.
pub fn update_live_drag(state: &mut AppState, sample: DragSample) {
    state.live_drag = Some(sample);
}

/// Hängt das aus einem finalen Sample abgeleitete Segment an den Pfad.
///
/// Nicht-finale Samples werden abgelehnt; der Pfad bleibt dann unverändert.
pub fn commit_drag(state: &mut AppState, sample: DragSample) -> anyhow::Result<()> {
    if !sample.is_final {
        anyhow::bail!("Drag-Sample ist nicht final, Commit abgelehnt: {:?}", sample);
    }

    let segment = state
        .path
        .push_sample(&sample, state.options.drag_threshold);
    log::debug!(
        "Segment #{} committet: {} bis ({:.1}, {:.1})",
        state.path.len() - 1,
        segment.kind().label(),
        segment.to().x,
        segment.to().y
    );
    Ok(())
}

/// Verwirft die Vorschau der laufenden Geste.
pub fn clear_live_drag(state: &mut AppState) {
    if state.live_drag.take().is_some() {
        log::trace!("Live-Drag verworfen");
    }
}
