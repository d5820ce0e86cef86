//! Der committete Vektorpfad und die Anhänge-Regel für neue Segmente.

use super::geometry::{cubic_bezier, mirror, quadratic_bezier, sample_curve, DRAG_THRESHOLD};
use super::handles::{handles_for, HandleSet, IndexedHandles};
use super::{DragSample, PathSegment};
use glam::Vec2;

/// Geordnete, nur anhängbare Folge von Pfad-Segmenten.
///
/// Invariante: Das erste Segment (falls vorhanden) ist immer ein `Move`.
/// Bestehende Segmente werden nie verändert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorPath {
    segments: Vec<PathSegment>,
}

impl VectorPath {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Alle Segmente in Zeichenreihenfolge.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Letztes Segment (Basis für die Glattheits-Ableitung).
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Aktueller Stiftpunkt: `to` des letzten Segments.
    pub fn current_point(&self) -> Option<Vec2> {
        self.last().map(PathSegment::to)
    }

    /// Segmente mit ihrer Position als stabilem Render-Schlüssel.
    pub fn indexed_segments(&self) -> impl Iterator<Item = (usize, &PathSegment)> {
        self.segments.iter().enumerate()
    }

    /// Liefert einen neuen Pfad mit genau einem zusätzlichen Segment.
    ///
    /// Reine Funktion: `self` bleibt unverändert. Wird sowohl für die
    /// Live-Vorschau als auch für den Commit verwendet.
    pub fn appended(&self, sample: &DragSample) -> Self {
        self.appended_with_threshold(sample, DRAG_THRESHOLD)
    }

    /// Wie [`VectorPath::appended`], mit konfigurierbarer Drag-Schwelle.
    pub fn appended_with_threshold(&self, sample: &DragSample, drag_threshold: f32) -> Self {
        let mut copy = self.clone();
        copy.push_sample(sample, drag_threshold);
        copy
    }

    /// Hängt das aus `sample` abgeleitete Segment an und gibt es zurück.
    pub fn push_sample(&mut self, sample: &DragSample, drag_threshold: f32) -> PathSegment {
        let segment = next_segment(self.last(), sample, drag_threshold);
        self.segments.push(segment);
        segment
    }

    /// Handles aller Segmente, indexiert nach Position (leer bei leerem Pfad).
    pub fn handles(&self) -> Vec<IndexedHandles> {
        self.indexed_segments()
            .map(|(index, segment)| IndexedHandles {
                index,
                handles: handles_for(segment),
            })
            .collect()
    }

    /// Handles eines einzelnen Segments; `HandleSet::Empty` außerhalb des Pfads.
    pub fn handles_at(&self, index: usize) -> HandleSet {
        self.segments
            .get(index)
            .map_or(HandleSet::Empty, handles_for)
    }

    /// Zerlegt den Pfad in Polylinien (eine pro Teilpfad).
    ///
    /// Kurven werden arc-length-gleichmäßig mit höchstens
    /// `max_segment_length` Abstand abgetastet; Linien liefern nur ihren Endpunkt.
    pub fn flatten(&self, max_segment_length: f32) -> Vec<Vec<Vec2>> {
        let mut polylines: Vec<Vec<Vec2>> = Vec::new();
        let mut current: Vec<Vec2> = Vec::new();

        for segment in &self.segments {
            match *segment {
                PathSegment::Move { to } => {
                    if !current.is_empty() {
                        polylines.push(std::mem::take(&mut current));
                    }
                    current.push(to);
                }
                PathSegment::Line { to } => current.push(to),
                PathSegment::QuadCurve { to, control } => {
                    let from = current.last().copied().unwrap_or(to);
                    let points =
                        sample_curve(|t| quadratic_bezier(from, control, to, t), max_segment_length);
                    extend_curve(&mut current, &points, to);
                }
                PathSegment::CubicCurve {
                    to,
                    control1,
                    control2,
                } => {
                    let from = current.last().copied().unwrap_or(to);
                    let points = sample_curve(
                        |t| cubic_bezier(from, control1, control2, to, t),
                        max_segment_length,
                    );
                    extend_curve(&mut current, &points, to);
                }
            }
        }

        if !current.is_empty() {
            polylines.push(current);
        }
        polylines
    }
}

/// Übernimmt die Kurvenpunkte ohne den (bereits vorhandenen) Startpunkt.
fn extend_curve(polyline: &mut Vec<Vec2>, points: &[Vec2], to: Vec2) {
    if points.len() > 1 {
        polyline.extend_from_slice(&points[1..]);
    } else {
        polyline.push(to);
    }
}

/// Leitet das nächste Segment aus dem Vorgänger und einer Drag-Geste ab.
///
/// - Leerer Pfad → `Move` an `start_location` (`location` wird ignoriert).
/// - Vorgänger ist Kurve → eingehender Steuerpunkt = Spiegelung des
///   ausgehenden Vorgänger-Steuerpunkts an dessen Anker (C1-Stetigkeit).
/// - Drag (`distance > drag_threshold`) → ausgehender Steuerpunkt =
///   `location` gespiegelt an `start_location`; Quad ohne, Cubic mit
///   eingehendem Steuerpunkt.
/// - Klick → `Line`, bzw. entartete Cubic mit `control2 == to`, wenn ein
///   eingehender Steuerpunkt existiert.
///
/// Der Anker des neuen Segments ist immer `start_location`.
pub fn next_segment(
    previous: Option<&PathSegment>,
    sample: &DragSample,
    drag_threshold: f32,
) -> PathSegment {
    let Some(previous) = previous else {
        return PathSegment::Move {
            to: sample.start_location,
        };
    };

    let to = sample.start_location;
    let incoming = previous
        .outgoing_control()
        .map(|control| mirror(control, previous.to()));

    let outgoing = if sample.is_drag(drag_threshold) {
        Some(mirror(sample.location, sample.start_location))
    } else {
        None
    };

    match (incoming, outgoing) {
        (Some(control1), Some(control2)) => PathSegment::CubicCurve {
            to,
            control1,
            control2,
        },
        (None, Some(control)) => PathSegment::QuadCurve { to, control },
        (Some(control1), None) => PathSegment::CubicCurve {
            to,
            control1,
            control2: to,
        },
        (None, None) => PathSegment::Line { to },
    }
}
