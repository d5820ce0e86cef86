//! Render-Szene als expliziter Übergabevertrag zwischen App und UI-Canvas.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{IndexedHandles, VectorPath};
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Angezeigter Pfad: committeter Pfad plus ggf. Vorschau-Segment
    pub path: VectorPath,
    /// Handles pro Segment, Schlüssel = Segment-Index
    pub handles: Vec<IndexedHandles>,
    /// Abgeflachter Pfad als Polylinien (lokale Koordinaten)
    pub polylines: Vec<Vec<Vec2>>,
    /// Ob das letzte Segment eine noch nicht committete Vorschau ist
    pub preview_active: bool,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}
