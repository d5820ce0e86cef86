//! Zentrale Konfiguration für den Vector-Pen-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::DRAG_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

// ── Eingabe ─────────────────────────────────────────────────────────

/// Abtast-Abstand beim Abflachen von Kurven (lokale Einheiten).
pub const FLATTEN_SEGMENT_LENGTH: f32 = 2.0;

// ── Pfad-Rendering ──────────────────────────────────────────────────

/// Linienstärke des Pfads in Pixeln.
pub const PATH_STROKE_WIDTH: f32 = 2.0;
/// Farbe des Pfads (RGBA: Schwarz).
pub const PATH_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const CANVAS_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Handle-Rendering ────────────────────────────────────────────────

/// Radius der Anker-Kreise in Pixeln.
pub const ANCHOR_RADIUS: f32 = 5.0;
/// Halbe Kantenlänge der Steuerpunkt-Quadrate in Pixeln.
pub const CONTROL_HALF_SIZE: f32 = 3.0;
/// Eckenradius der Steuerpunkt-Quadrate.
pub const CONTROL_CORNER_RADIUS: f32 = 2.0;
/// Füllfarbe der Handles (RGBA: Weiß).
pub const HANDLE_FILL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Randfarbe der Handles (RGBA: Schwarz).
pub const HANDLE_STROKE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Tangenten-Hilfslinie (RGBA: Grau).
pub const GUIDE_COLOR: [f32; 4] = [0.56, 0.56, 0.58, 1.0];

// ── Gültige Wertebereiche (Dialog und Laden) ───────────────────────

/// Erlaubte Drag-Schwelle.
pub const DRAG_THRESHOLD_RANGE: RangeInclusive<f32> = 0.0..=20.0;
/// Erlaubter Abtast-Abstand für Kurven.
pub const FLATTEN_SEGMENT_LENGTH_RANGE: RangeInclusive<f32> = 0.25..=20.0;
/// Erlaubte Linienstärke des Pfads.
pub const PATH_STROKE_WIDTH_RANGE: RangeInclusive<f32> = 0.5..=10.0;
/// Erlaubter Anker-Radius.
pub const ANCHOR_RADIUS_RANGE: RangeInclusive<f32> = 2.0..=20.0;
/// Erlaubte halbe Kantenlänge der Steuerpunkte.
pub const CONTROL_HALF_SIZE_RANGE: RangeInclusive<f32> = 1.0..=20.0;
/// Erlaubter Eckenradius der Steuerpunkte.
pub const CONTROL_CORNER_RADIUS_RANGE: RangeInclusive<f32> = 0.0..=20.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `vector_pen_editor.toml` neben der Binary gespeichert.
///
/// Fehlende Felder in bestehenden TOML-Dateien fallen auf die Standardwerte zurück.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Eingabe ─────────────────────────────────────────────────
    /// Mindestverschiebung, ab der eine Geste als Kurven-Drag zählt
    pub drag_threshold: f32,
    /// Abtast-Abstand für Kurven beim Zeichnen
    pub flatten_segment_length: f32,

    // ── Pfad ────────────────────────────────────────────────────
    /// Linienstärke des Pfads
    pub path_stroke_width: f32,
    /// Farbe des Pfads
    pub path_color: [f32; 4],
    /// Hintergrundfarbe der Zeichenfläche
    pub canvas_color: [f32; 4],

    // ── Handles ─────────────────────────────────────────────────
    /// Radius der Anker-Kreise
    pub anchor_radius: f32,
    /// Halbe Kantenlänge der Steuerpunkt-Quadrate
    pub control_half_size: f32,
    /// Eckenradius der Steuerpunkt-Quadrate
    pub control_corner_radius: f32,
    /// Füllfarbe der Handles
    pub handle_fill_color: [f32; 4],
    /// Randfarbe der Handles
    pub handle_stroke_color: [f32; 4],
    /// Farbe der Tangenten-Hilfslinie
    pub guide_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            drag_threshold: DRAG_THRESHOLD,
            flatten_segment_length: FLATTEN_SEGMENT_LENGTH,

            path_stroke_width: PATH_STROKE_WIDTH,
            path_color: PATH_COLOR,
            canvas_color: CANVAS_COLOR,

            anchor_radius: ANCHOR_RADIUS,
            control_half_size: CONTROL_HALF_SIZE,
            control_corner_radius: CONTROL_CORNER_RADIUS,
            handle_fill_color: HANDLE_FILL_COLOR,
            handle_stroke_color: HANDLE_STROKE_COLOR,
            guide_color: GUIDE_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    ///
    /// Werte außerhalb der gültigen Bereiche werden per [`EditorOptions::sanitized`] begrenzt.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    let sanitized = opts.clone().sanitized();
                    if sanitized != opts {
                        log::warn!("Ungültige Optionswerte auf gültige Bereiche begrenzt");
                    }
                    sanitized
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Begrenzt alle Werte auf ihre gültigen Bereiche.
    ///
    /// Nicht-endliche Werte fallen auf den jeweiligen Standardwert zurück.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            drag_threshold: clamp_or(
                self.drag_threshold,
                DRAG_THRESHOLD_RANGE,
                defaults.drag_threshold,
            ),
            flatten_segment_length: clamp_or(
                self.flatten_segment_length,
                FLATTEN_SEGMENT_LENGTH_RANGE,
                defaults.flatten_segment_length,
            ),
            path_stroke_width: clamp_or(
                self.path_stroke_width,
                PATH_STROKE_WIDTH_RANGE,
                defaults.path_stroke_width,
            ),
            path_color: clamp_color(self.path_color, defaults.path_color),
            canvas_color: clamp_color(self.canvas_color, defaults.canvas_color),
            anchor_radius: clamp_or(
                self.anchor_radius,
                ANCHOR_RADIUS_RANGE,
                defaults.anchor_radius,
            ),
            control_half_size: clamp_or(
                self.control_half_size,
                CONTROL_HALF_SIZE_RANGE,
                defaults.control_half_size,
            ),
            control_corner_radius: clamp_or(
                self.control_corner_radius,
                CONTROL_CORNER_RADIUS_RANGE,
                defaults.control_corner_radius,
            ),
            handle_fill_color: clamp_color(self.handle_fill_color, defaults.handle_fill_color),
            handle_stroke_color: clamp_color(
                self.handle_stroke_color,
                defaults.handle_stroke_color,
            ),
            guide_color: clamp_color(self.guide_color, defaults.guide_color),
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("vector_pen_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("vector_pen_editor.toml")
    }
}

fn clamp_or(value: f32, range: RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}

fn clamp_color(color: [f32; 4], fallback: [f32; 4]) -> [f32; 4] {
    let mut out = color;
    for (channel, default) in out.iter_mut().zip(fallback) {
        *channel = clamp_or(*channel, 0.0..=1.0, default);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "vector_pen_editor_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_default_threshold_matches_core() {
        assert_eq!(EditorOptions::default().drag_threshold, DRAG_THRESHOLD);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_config("roundtrip");
        let mut opts = EditorOptions::default();
        opts.drag_threshold = 4.5;
        opts.path_color = [0.2, 0.3, 0.4, 1.0];

        opts.save_to_file(&path).expect("Speichern muss klappen");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let opts: EditorOptions =
            toml::from_str("drag_threshold = 3.0\n").expect("Teil-TOML muss parsen");
        assert_eq!(opts.drag_threshold, 3.0);
        assert_eq!(opts.anchor_radius, ANCHOR_RADIUS);
        assert_eq!(opts.guide_color, GUIDE_COLOR);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = temp_config("malformed");
        std::fs::write(&path, "drag_threshold = \"viel\"").expect("Schreiben muss klappen");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let loaded = EditorOptions::load_from_file(&temp_config("does_not_exist"));
        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn test_negative_drag_threshold_is_clamped_on_load() {
        let path = temp_config("negative_threshold");
        std::fs::write(&path, "drag_threshold = -1.0\n").expect("Schreiben muss klappen");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.drag_threshold, 0.0);
    }

    #[test]
    fn test_tiny_flatten_length_is_clamped_on_load() {
        let path = temp_config("tiny_flatten");
        std::fs::write(&path, "flatten_segment_length = 1e-30\n").expect("Schreiben muss klappen");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.flatten_segment_length, *FLATTEN_SEGMENT_LENGTH_RANGE.start());
    }

    #[test]
    fn test_sanitized_clamps_ranges_and_replaces_non_finite() {
        let opts = EditorOptions {
            path_stroke_width: 500.0,
            anchor_radius: f32::NAN,
            control_half_size: f32::INFINITY,
            guide_color: [2.0, -1.0, 0.5, f32::NAN],
            ..EditorOptions::default()
        }
        .sanitized();

        assert_eq!(opts.path_stroke_width, *PATH_STROKE_WIDTH_RANGE.end());
        assert_eq!(opts.anchor_radius, ANCHOR_RADIUS);
        assert_eq!(opts.control_half_size, CONTROL_HALF_SIZE);
        assert_eq!(opts.guide_color, [1.0, 0.0, 0.5, GUIDE_COLOR[3]]);
    }

    #[test]
    fn test_defaults_are_already_sanitized() {
        assert_eq!(EditorOptions::default().sanitized(), EditorOptions::default());
    }
}
