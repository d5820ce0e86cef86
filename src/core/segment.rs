//! Ein einzelnes Zeichenkommando eines Pfads (Move, Line, Quad, Cubic).

use glam::Vec2;

/// Pfad-Segment als Summentyp.
///
/// Der implizite Startpunkt jedes Segments ist der `to`-Punkt des Vorgängers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Beginnt einen neuen Teilpfad bei `to`
    Move { to: Vec2 },
    /// Gerade Strecke bis `to`
    Line { to: Vec2 },
    /// Quadratische Bézier-Kurve bis `to` mit einem Steuerpunkt
    QuadCurve { to: Vec2, control: Vec2 },
    /// Kubische Bézier-Kurve bis `to`.
    ///
    /// `control1` wird aus dem Vorgänger abgeleitet (nie vom Nutzer gezogen),
    /// `control2` ist der vom Nutzer gezogene Steuerpunkt.
    CubicCurve {
        to: Vec2,
        control1: Vec2,
        control2: Vec2,
    },
}

/// Segment-Art ohne Nutzdaten (Logging, Status-Bar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Move,
    Line,
    QuadCurve,
    CubicCurve,
}

impl SegmentKind {
    /// Anzeigename für die UI.
    pub fn label(self) -> &'static str {
        match self {
            SegmentKind::Move => "Move",
            SegmentKind::Line => "Linie",
            SegmentKind::QuadCurve => "Quad-Kurve",
            SegmentKind::CubicCurve => "Kubische Kurve",
        }
    }
}

impl PathSegment {
    /// Ankerpunkt: Endpunkt des Segments, an dem der Stift landet.
    pub fn to(&self) -> Vec2 {
        match *self {
            PathSegment::Move { to }
            | PathSegment::Line { to }
            | PathSegment::QuadCurve { to, .. }
            | PathSegment::CubicCurve { to, .. } => to,
        }
    }

    /// Sichtbarer, vom Nutzer gezogener Steuerpunkt (falls Kurve).
    pub fn outgoing_control(&self) -> Option<Vec2> {
        match *self {
            PathSegment::QuadCurve { control, .. } => Some(control),
            PathSegment::CubicCurve { control2, .. } => Some(control2),
            PathSegment::Move { .. } | PathSegment::Line { .. } => None,
        }
    }

    pub fn kind(&self) -> SegmentKind {
        match self {
            PathSegment::Move { .. } => SegmentKind::Move,
            PathSegment::Line { .. } => SegmentKind::Line,
            PathSegment::QuadCurve { .. } => SegmentKind::QuadCurve,
            PathSegment::CubicCurve { .. } => SegmentKind::CubicCurve,
        }
    }
}
