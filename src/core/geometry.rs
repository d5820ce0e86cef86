//! Geometrie-Grundfunktionen: Punktspiegelung, Bézier-Auswertung, Arc-Length-Abtastung.

use glam::Vec2;

/// Mindest-Zeigerverschiebung (Einheiten), ab der eine Geste als Kurven-Drag gilt.
///
/// Verschiebungen `<= DRAG_THRESHOLD` sind Klicks und erzeugen gerade Anschlüsse.
pub const DRAG_THRESHOLD: f32 = 1.0;

/// Obergrenze der Abtast-Segmente pro Kurve in [`sample_curve`].
pub const MAX_CURVE_SEGMENTS: usize = 4096;

/// Spiegelt `point` am Zentrum `about` (Punktspiegelung).
///
/// `mirror(p, c) = 2·c − p`
pub fn mirror(point: Vec2, about: Vec2) -> Vec2 {
    2.0 * about - point
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Approximierte Kurvenlänge über Polylinien-Segmente.
pub fn approx_length(eval: impl Fn(f32) -> Vec2, samples: usize) -> f32 {
    let mut length = 0.0;
    let mut prev = eval(0.0);
    for i in 1..=samples {
        let t = i as f32 / samples as f32;
        let p = eval(t);
        length += prev.distance(p);
        prev = p;
    }
    length
}

/// Gleichmäßig verteilte Punkte entlang einer parametrischen Kurve (Arc-Length).
///
/// Enthält Start- und Endpunkt. Eine entartete Kurve (Länge ≈ 0) liefert
/// nur den Startpunkt. Höchstens [`MAX_CURVE_SEGMENTS`] Segmente, auch bei
/// sehr kleinem `max_segment_length`.
pub fn sample_curve(eval: impl Fn(f32) -> Vec2, max_segment_length: f32) -> Vec<Vec2> {
    let start = eval(0.0);
    let total_length = approx_length(&eval, 64);
    if total_length < f32::EPSILON || max_segment_length <= 0.0 {
        return vec![start];
    }

    let segment_count = (total_length / max_segment_length)
        .ceil()
        .clamp(1.0, MAX_CURVE_SEGMENTS as f32) as usize;
    let target_spacing = total_length / segment_count as f32;

    let lut_samples = 128;
    let mut arc_lengths = Vec::with_capacity(lut_samples + 1);
    let mut prev = start;
    let mut cumulative = 0.0f32;
    arc_lengths.push(0.0f32);
    for i in 1..=lut_samples {
        let t = i as f32 / lut_samples as f32;
        let p = eval(t);
        cumulative += prev.distance(p);
        arc_lengths.push(cumulative);
        prev = p;
    }

    let mut positions = Vec::with_capacity(segment_count + 1);
    positions.push(start);

    for seg in 1..segment_count {
        let target_length = seg as f32 * target_spacing;
        let idx = arc_lengths
            .partition_point(|&len| len < target_length)
            .clamp(1, lut_samples);

        let len_before = arc_lengths[idx - 1];
        let len_after = arc_lengths[idx];
        let frac = if (len_after - len_before).abs() > f32::EPSILON {
            (target_length - len_before) / (len_after - len_before)
        } else {
            0.0
        };

        let t = ((idx - 1) as f32 + frac) / lut_samples as f32;
        positions.push(eval(t));
    }

    positions.push(eval(1.0));
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mirror_reflects_through_center() {
        let mirrored = mirror(Vec2::new(10.0, 5.0), Vec2::new(10.0, 0.0));
        assert_relative_eq!(mirrored.x, 10.0);
        assert_relative_eq!(mirrored.y, -5.0);
    }

    #[test]
    fn test_mirror_is_involution() {
        let cases = [
            (Vec2::new(3.5, -2.25), Vec2::new(0.0, 0.0)),
            (Vec2::new(-120.0, 44.0), Vec2::new(17.5, 9.0)),
            (Vec2::new(0.125, 0.5), Vec2::new(0.125, 0.5)),
        ];
        for (p, c) in cases {
            let back = mirror(mirror(p, c), c);
            assert_relative_eq!(back.x, p.x, epsilon = 1e-4);
            assert_relative_eq!(back.y, p.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_mirror_of_center_is_center() {
        let c = Vec2::new(4.0, 7.0);
        assert_eq!(mirror(c, c), c);
    }

    #[test]
    fn test_quadratic_bezier_endpoints() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(5.0, 10.0);
        let p2 = Vec2::new(10.0, 0.0);

        assert!((quadratic_bezier(p0, p1, p2, 0.0) - p0).length() < 0.001);
        assert!((quadratic_bezier(p0, p1, p2, 1.0) - p2).length() < 0.001);
        assert!((quadratic_bezier(p0, p1, p2, 0.5) - Vec2::new(5.0, 5.0)).length() < 0.001);
    }

    #[test]
    fn test_cubic_bezier_symmetry() {
        // Symmetrische S-Kurve → Mittelpunkt bei (5, 5)
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(0.0, 10.0);
        let p2 = Vec2::new(10.0, 0.0);
        let p3 = Vec2::new(10.0, 10.0);

        let mid = cubic_bezier(p0, p1, p2, p3, 0.5);
        assert!((mid - Vec2::new(5.0, 5.0)).length() < 0.001);
    }

    #[test]
    fn test_sample_curve_spacing() {
        let start = Vec2::new(0.0, 0.0);
        let control = Vec2::new(5.0, 10.0);
        let end = Vec2::new(10.0, 0.0);

        let positions = sample_curve(|t| quadratic_bezier(start, control, end, t), 2.0);
        assert!(positions.len() >= 3);
        assert!((positions[0] - start).length() < 0.01);
        assert!((*positions.last().unwrap() - end).length() < 0.01);
        for pair in positions.windows(2) {
            let dist = pair[0].distance(pair[1]);
            assert!(dist < 2.5, "Abstand {:.2} zu groß", dist);
        }
    }

    #[test]
    fn test_sample_degenerate_curve_returns_single_point() {
        let p = Vec2::new(3.0, 3.0);
        let positions = sample_curve(|t| cubic_bezier(p, p, p, p, t), 2.0);
        assert_eq!(positions, vec![p]);
    }

    #[test]
    fn test_sample_curve_caps_segment_count() {
        let start = Vec2::new(0.0, 0.0);
        let control = Vec2::new(10.0, -5.0);
        let end = Vec2::new(10.0, 0.0);

        for spacing in [1e-30, f32::MIN_POSITIVE, 1e-6] {
            let positions = sample_curve(|t| quadratic_bezier(start, control, end, t), spacing);
            assert_eq!(positions.len(), MAX_CURVE_SEGMENTS + 1);
            assert!((*positions.last().unwrap() - end).length() < 0.01);
        }
    }
}
