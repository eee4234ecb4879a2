// src/math/algorithms/simplification.rs

use crate::math::utils::simple_geometry::distance_sq;
use bevy::math::Vec2;

/// Standard-Mindestabstand für die Ausdünnung roher Stroke-Samples.
pub const DEFAULT_MIN_DIST: f32 = 3.0;

/// Dünnt einen dichten Stroke per Mindestabstand aus.
///
/// Der erste Punkt bleibt immer erhalten. Jeder weitere Punkt wird nur übernommen,
/// wenn sein quadrierter Abstand zum zuletzt *übernommenen* Punkt mindestens
/// `min_dist²` beträgt. Bleibt danach nur ein Punkt übrig, wird der letzte
/// Originalpunkt angehängt. Eingaben mit höchstens zwei Punkten werden kopiert.
pub fn simplify_stroke(points: &[Vec2], min_dist: f32) -> Vec<Vec2> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let min_dist_sq = min_dist * min_dist;
    let mut retained = vec![points[0]];
    let mut last = points[0];

    for &point in &points[1..] {
        if distance_sq(point, last) >= min_dist_sq {
            retained.push(point);
            last = point;
        }
    }

    if retained.len() < 2 {
        retained.push(points[points.len() - 1]);
    }

    retained
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense_line(count: usize, step: f32) -> Vec<Vec2> {
        (0..count).map(|i| Vec2::new(i as f32 * step, 0.0)).collect()
    }

    #[test]
    fn test_short_input_is_copied() {
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(0.1, 0.0)];
        assert_eq!(simplify_stroke(&points, 3.0), points);
        assert!(simplify_stroke(&[], 3.0).is_empty());
    }

    #[test]
    fn test_retained_points_respect_min_distance() {
        let points = dense_line(100, 1.0);
        let simplified = simplify_stroke(&points, 4.0);

        assert!(simplified.len() <= points.len());
        assert_eq!(simplified.len(), 25); // 0, 4, 8, ..., 96
        for pair in simplified.windows(2) {
            assert!(distance_sq(pair[0], pair[1]) >= 16.0);
        }
    }

    #[test]
    fn test_collapsed_stroke_keeps_last_sample() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.5, 0.0),
            Vec2::new(1.0, 0.5),
        ];
        let simplified = simplify_stroke(&points, 3.0);
        assert_eq!(simplified, vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.5)]);
    }

    #[test]
    fn test_distance_is_measured_from_last_retained_point() {
        // 2.5er-Schritte: erst jeder zweite Punkt erreicht den Mindestabstand 4
        let points = dense_line(9, 2.5);
        let simplified = simplify_stroke(&points, 4.0);
        assert_eq!(
            simplified,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(5.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(15.0, 0.0),
                Vec2::new(20.0, 0.0),
            ]
        );
    }
}
