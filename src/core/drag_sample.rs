//! Momentaufnahme einer Zeiger-Drag-Geste im lokalen Koordinatenraum.

use glam::Vec2;

/// Snapshot einer laufenden oder abgeschlossenen Drag-Geste.
///
/// Der Ankerpunkt eines neuen Segments kommt immer aus `start_location`;
/// die Verschiebung zu `location` kodiert nur die Richtung des Kurven-Handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Position, an der die Geste begann
    pub start_location: Vec2,
    /// Aktuelle bzw. losgelassene Zeigerposition
    pub location: Vec2,
    /// `true` = Geste beendet (Loslassen), nur dann wird committet
    pub is_final: bool,
}

impl DragSample {
    /// Zwischenstand einer noch laufenden Geste (nur Vorschau).
    pub fn live(start_location: Vec2, location: Vec2) -> Self {
        Self {
            start_location,
            location,
            is_final: false,
        }
    }

    /// Abgeschlossene Geste (darf den Pfad verändern).
    pub fn finished(start_location: Vec2, location: Vec2) -> Self {
        Self {
            start_location,
            location,
            is_final: true,
        }
    }

    /// Abstand zwischen Start- und aktueller Position.
    pub fn distance(&self) -> f32 {
        self.start_location.distance(self.location)
    }

    /// Drag statt Klick: Abstand echt größer als `threshold`.
    pub fn is_drag(&self, threshold: f32) -> bool {
        self.distance() > threshold
    }

    /// Alle Koordinaten endlich (kein NaN/∞).
    pub fn is_finite(&self) -> bool {
        self.start_location.is_finite() && self.location.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_distance_is_not_a_drag() {
        let sample = DragSample::live(Vec2::new(10.0, 0.0), Vec2::new(11.0, 0.0));
        assert!(!sample.is_drag(1.0));
        let sample = DragSample::live(Vec2::new(10.0, 0.0), Vec2::new(11.01, 0.0));
        assert!(sample.is_drag(1.0));
    }

    #[test]
    fn test_non_finite_sample_is_detected() {
        let sample = DragSample::finished(Vec2::new(f32::NAN, 0.0), Vec2::ZERO);
        assert!(!sample.is_finite());
        assert!(DragSample::finished(Vec2::ZERO, Vec2::ONE).is_finite());
    }
}
