// src/sketch/strokes.rs

use bevy::math::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Erzeugt handgezeichnet wirkende Strokes: dicht abgetastete Kanten mit Zittern.
#[derive(Debug, Clone)]
pub struct StrokeGenerator {
    rng: StdRng,
    /// Maximale Auslenkung pro Achse.
    jitter: f32,
    /// Abstand der Abtastpunkte entlang einer Kante.
    spacing: f32,
}

impl StrokeGenerator {
    /// Ohne Seed wird aus dem Thread-RNG initialisiert.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            StdRng::seed_from_u64(seed)
        } else {
            let mut thread_rng = rand::rng();
            StdRng::from_rng(&mut thread_rng)
        };
        Self {
            rng,
            jitter: 2.0,
            spacing: 5.0,
        }
    }

    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter.max(0.0);
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.1);
        self
    }

    fn wobble(&mut self, point: Vec2) -> Vec2 {
        if self.jitter == 0.0 {
            return point;
        }
        let j = self.jitter;
        point + Vec2::new(self.rng.random_range(-j..=j), self.rng.random_range(-j..=j))
    }

    /// Tastet den Linienzug durch `corners` ab.
    ///
    /// Mit `closed` endet der Stroke wieder am ersten Eckpunkt.
    pub fn polyline(&mut self, corners: &[Vec2], closed: bool) -> Vec<Vec2> {
        let mut stroke = Vec::new();
        let Some(&first) = corners.first() else {
            return stroke;
        };

        let mut path = corners.to_vec();
        if closed {
            path.push(first);
        }

        stroke.push(self.wobble(first));
        for edge in path.windows(2) {
            let (a, b) = (edge[0], edge[1]);
            let steps = ((b - a).length() / self.spacing).ceil().max(1.0) as usize;
            for step in 1..=steps {
                let t = step as f32 / steps as f32;
                let sample = a.lerp(b, t);
                stroke.push(self.wobble(sample));
            }
        }
        stroke
    }

    /// Kreis mit `samples` Punkten, ohne den Startpunkt zu wiederholen.
    pub fn circle(&mut self, center: Vec2, radius: f32, samples: usize) -> Vec<Vec2> {
        (0..samples)
            .map(|i| {
                let angle = TAU * i as f32 / samples as f32;
                let point = center + Vec2::new(angle.cos(), angle.sin()) * radius;
                self.wobble(point)
            })
            .collect()
    }

    /// Achsenparalleles Rechteck als geschlossener Stroke.
    pub fn rectangle(&mut self, min: Vec2, max: Vec2) -> Vec<Vec2> {
        let corners = [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];
        self.polyline(&corners, true)
    }

    /// L-Form: Quadrat der Kantenlänge `size`, oben rechts um `notch` ausgespart.
    pub fn l_shape(&mut self, origin: Vec2, size: f32, notch: f32) -> Vec<Vec2> {
        let inner = size - notch;
        let corners = [
            origin,
            origin + Vec2::new(size, 0.0),
            origin + Vec2::new(size, inner),
            origin + Vec2::new(inner, inner),
            origin + Vec2::new(inner, size),
            origin + Vec2::new(0.0, size),
        ];
        self.polyline(&corners, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::{PolygonBuilder, PolygonProperties, first_concave_index};
    use approx::assert_relative_eq;

    #[test]
    fn test_same_seed_same_stroke() {
        let a = StrokeGenerator::new(Some(7)).circle(Vec2::ZERO, 50.0, 32);
        let b = StrokeGenerator::new(Some(7)).circle(Vec2::ZERO, 50.0, 32);
        assert_eq!(a, b);
    }

    #[test]
    fn test_jitter_is_bounded() {
        let mut generator = StrokeGenerator::new(Some(1)).with_jitter(3.0);
        let stroke = generator.polyline(&[Vec2::ZERO, Vec2::new(100.0, 0.0)], false);
        assert_eq!(stroke.len(), 21);
        assert!(stroke.iter().all(|p| p.y.abs() <= 3.0));
    }

    #[test]
    fn test_spacing_controls_sample_count() {
        let edge = [Vec2::ZERO, Vec2::new(100.0, 0.0)];
        let mut generator = StrokeGenerator::new(Some(3))
            .with_jitter(0.0)
            .with_spacing(20.0);
        assert_eq!(generator.polyline(&edge, false).len(), 6);

        // Untergrenze verhindert Endlosabtastung
        let mut dense = StrokeGenerator::new(Some(3)).with_jitter(0.0).with_spacing(0.0);
        assert_eq!(dense.polyline(&edge, false).len(), 1001);
    }

    #[test]
    fn test_clean_rectangle_is_closed() {
        let mut generator = StrokeGenerator::new(Some(0)).with_jitter(0.0);
        let stroke = generator.rectangle(Vec2::ZERO, Vec2::new(100.0, 50.0));
        assert_eq!(stroke.first(), stroke.last());

        let polygon = PolygonBuilder::new().build(&stroke).unwrap();
        assert_relative_eq!(polygon.area(), 5000.0, epsilon = 1e-2);
    }

    #[test]
    fn test_l_shape_has_one_notch() {
        let mut generator = StrokeGenerator::new(Some(42)).with_jitter(1.0);
        let stroke = generator.l_shape(Vec2::new(50.0, 50.0), 200.0, 100.0);
        let polygon = PolygonBuilder::new().build(&stroke).unwrap();
        assert!(first_concave_index(&polygon).is_some());
    }
}
