// src/math/geometry/polygon/builder.rs

use crate::math::algorithms::simplification::simplify_stroke;
use crate::math::error::{MathError, MathResult};
use crate::math::geometry::polygon::core::Polygon;
use crate::math::geometry::polygon::properties::PolygonProperties;
use crate::math::utils::simple_geometry::distance;
use bevy::log::debug;
use bevy::math::Vec2;

/// Mindestabstand, mit dem der Builder den Stroke ausdünnt.
pub const BUILDER_MIN_DIST: f32 = 4.0;
/// Standard-Schwelle, ab der ein offener Stroke explizit geschlossen wird.
pub const DEFAULT_CLOSE_THRESHOLD: f32 = 10.0;

/// Baut aus einem rohen Stroke ein geschlossenes, gegen den Uhrzeigersinn laufendes Polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonBuilder {
    min_dist: f32,
    close_threshold: f32,
}

impl Default for PolygonBuilder {
    fn default() -> Self {
        Self {
            min_dist: BUILDER_MIN_DIST,
            close_threshold: DEFAULT_CLOSE_THRESHOLD,
        }
    }
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_dist(mut self, min_dist: f32) -> Self {
        self.min_dist = min_dist;
        self
    }

    pub fn with_close_threshold(mut self, close_threshold: f32) -> Self {
        self.close_threshold = close_threshold;
        self
    }

    /// Erstellt das Polygon.
    ///
    /// Liegen erster und letzter ausgedünnter Punkt weiter als `close_threshold`
    /// auseinander, wird eine Kopie des ersten Punktes angehängt. Näher beieinander
    /// liegende Enden gelten als geschlossen, der Ring schließt dann implizit.
    pub fn build(&self, stroke: &[Vec2]) -> MathResult<Polygon> {
        if stroke.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: stroke.len(),
            });
        }

        let mut vertices = simplify_stroke(stroke, self.min_dist);
        if vertices.len() < 3 {
            return Err(MathError::DegeneratePolygon {
                remaining: vertices.len(),
            });
        }

        let first = vertices[0];
        let last = vertices[vertices.len() - 1];
        if distance(first, last) > self.close_threshold {
            vertices.push(first);
        }

        let polygon = Polygon::new(vertices);
        Ok(polygon.to_counter_clockwise())
    }
}

/// Nachsichtige Variante: ein unbrauchbarer Stroke ergibt `None`.
pub fn polygon_from_stroke(stroke: &[Vec2], close_threshold: f32) -> Option<Polygon> {
    match PolygonBuilder::new()
        .with_close_threshold(close_threshold)
        .build(stroke)
    {
        Ok(polygon) => Some(polygon),
        Err(err) => {
            debug!("Stroke ignored: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::Orientation;

    fn square_stroke() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(0.0, 0.0),
        ]
    }

    #[test]
    fn test_square_stroke_builds_closed_ccw_polygon() {
        let polygon = polygon_from_stroke(&square_stroke(), DEFAULT_CLOSE_THRESHOLD).unwrap();
        assert_eq!(polygon.len(), 5);
        assert_eq!(polygon.orientation(), Orientation::CounterClockwise);
        assert!(polygon.has_closing_duplicate());
    }

    #[test]
    fn test_clockwise_stroke_is_reversed() {
        let mut stroke = square_stroke();
        stroke.reverse();
        let polygon = PolygonBuilder::new().build(&stroke).unwrap();
        assert!(polygon.signed_area() > 0.0);
    }

    #[test]
    fn test_open_stroke_gets_closing_vertex() {
        let stroke = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 0.0),
            Vec2::new(50.0, 50.0),
        ];
        let polygon = PolygonBuilder::new().build(&stroke).unwrap();
        assert_eq!(polygon.len(), 4);
        assert!(polygon.has_closing_duplicate());
    }

    #[test]
    fn test_nearly_closed_stroke_is_left_implicit() {
        let stroke = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 0.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(5.0, 5.0),
        ];
        let polygon = PolygonBuilder::new().build(&stroke).unwrap();
        assert_eq!(polygon.len(), 4);
        assert!(!polygon.has_closing_duplicate());
    }

    #[test]
    fn test_two_point_stroke_is_rejected() {
        let stroke = vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)];
        assert_eq!(
            PolygonBuilder::new().build(&stroke),
            Err(MathError::InsufficientPoints {
                expected: 3,
                actual: 2
            })
        );
        assert!(polygon_from_stroke(&stroke, DEFAULT_CLOSE_THRESHOLD).is_none());
    }

    #[test]
    fn test_jitter_collapses_to_degenerate() {
        let stroke = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, -1.0),
        ];
        assert_eq!(
            PolygonBuilder::new().build(&stroke),
            Err(MathError::DegeneratePolygon { remaining: 2 })
        );
    }
}
