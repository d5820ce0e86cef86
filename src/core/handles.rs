//! Handle-Projektion: leitet aus einem Segment die Render-Geometrie der
//! editierbaren Anker- und Steuerpunkte ab.
//!
//! Die Handles werden nie gespeichert, sondern pro Frame neu berechnet.

use super::geometry::mirror;
use super::PathSegment;
use glam::Vec2;

/// Darstellbare Handles eines Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleSet {
    /// Keine Handles (z.B. Index außerhalb des Pfads)
    Empty,
    /// Nur ein Ankerpunkt (Move/Line)
    Anchor { anchor: Vec2 },
    /// Ankerpunkt plus sichtbarer und gespiegelter Steuerpunkt
    Curve {
        anchor: Vec2,
        control: Vec2,
        mirrored: Vec2,
    },
}

impl HandleSet {
    /// Ankerpunkt, falls vorhanden.
    pub fn anchor(&self) -> Option<Vec2> {
        match *self {
            HandleSet::Empty => None,
            HandleSet::Anchor { anchor } | HandleSet::Curve { anchor, .. } => Some(anchor),
        }
    }

    /// Steuerpunkte (sichtbar, gespiegelt), leer bei geraden Segmenten.
    pub fn control_points(&self) -> Vec<Vec2> {
        match *self {
            HandleSet::Curve {
                control, mirrored, ..
            } => vec![control, mirrored],
            HandleSet::Empty | HandleSet::Anchor { .. } => Vec::new(),
        }
    }

    /// Tangenten-Hilfslinie `[control, anchor, mirrored]`.
    pub fn guide(&self) -> Option<[Vec2; 3]> {
        match *self {
            HandleSet::Curve {
                anchor,
                control,
                mirrored,
            } => Some([control, anchor, mirrored]),
            HandleSet::Empty | HandleSet::Anchor { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, HandleSet::Empty)
    }
}

/// Handles eines Segments, verschlüsselt über dessen Position im Pfad.
///
/// Der Index ist der stabile Listen-Schlüssel fürs Rendering; zwei
/// strukturell gleiche Segmente an verschiedenen Positionen bleiben unterscheidbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedHandles {
    pub index: usize,
    pub handles: HandleSet,
}

/// Berechnet die Handles für ein Segment.
///
/// Bei kubischen Kurven wird nur `control2` gezeigt; `control1` ist abgeleitet.
pub fn handles_for(segment: &PathSegment) -> HandleSet {
    match *segment {
        PathSegment::Move { to } | PathSegment::Line { to } => HandleSet::Anchor { anchor: to },
        PathSegment::QuadCurve { to, control }
        | PathSegment::CubicCurve {
            to,
            control2: control,
            ..
        } => HandleSet::Curve {
            anchor: to,
            control,
            mirrored: mirror(control, to),
        },
    }
}
