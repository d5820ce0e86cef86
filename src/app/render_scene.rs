//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Läuft eine Geste, wird ihr Vorschau-Segment mit derselben Anhänge-Regel
/// wie beim Commit an eine Kopie des Pfads gehängt.
pub fn build(state: &AppState) -> RenderScene {
    let path = state.live_path();
    let handles = path.handles();
    let polylines = path.flatten(state.options.flatten_segment_length);

    RenderScene {
        path,
        handles,
        polylines,
        preview_active: state.live_drag.is_some(),
        options: state.options.clone(),
    }
}
