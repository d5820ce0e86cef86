//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{DragSample, SegmentKind, VectorPath};
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Committeter Pfad (wird nur durch finale Drag-Samples verlängert)
    pub path: VectorPath,
    /// Laufende, noch nicht losgelassene Geste (nur für die Vorschau)
    pub live_drag: Option<DragSample>,
    /// Laufzeit-Optionen (Farben, Größen, Drag-Schwelle)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            path: VectorPath::new(),
            live_drag: None,
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Anzahl committeter Segmente (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.path.len()
    }

    /// Art des zuletzt committeten Segments
    pub fn last_segment_kind(&self) -> Option<SegmentKind> {
        self.path.last().map(|segment| segment.kind())
    }

    /// Gibt zurück, ob gerade eine Geste läuft.
    pub fn is_dragging(&self) -> bool {
        self.live_drag.is_some()
    }

    /// Angezeigter Pfad: committeter Pfad plus Vorschau-Segment der laufenden Geste.
    ///
    /// Entspricht exakt dem Ergebnis, das beim Loslassen an dieser Stelle committet würde.
    pub fn live_path(&self) -> VectorPath {
        match &self.live_drag {
            Some(sample) => self
                .path
                .appended_with_threshold(sample, self.options.drag_threshold),
            None => self.path.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
