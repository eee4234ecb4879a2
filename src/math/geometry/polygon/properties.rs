// src/math/geometry/polygon/properties.rs

use crate::math::geometry::polygon::core::Polygon;
use crate::math::utils::simple_geometry;
use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Trait für geometrische Eigenschaften von Polygonen.
pub trait PolygonProperties {
    /// Vorzeichenbehaftete Fläche (Shoelace). Positiv = gegen den Uhrzeigersinn.
    fn signed_area(&self) -> f32;

    /// Betrag der Fläche.
    fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Orientierung anhand des Vorzeichens der Fläche. Exakt Null gilt als kollinear.
    fn orientation(&self) -> Orientation;

    /// Ray-Casting-Test. Punkte auf dem Rand sind nicht eindeutig zugeordnet.
    fn contains_point(&self, point: Vec2) -> bool;

    /// Mittelwert aller gespeicherten Vertices (kein Flächenschwerpunkt).
    fn vertex_centroid(&self) -> Option<Vec2>;

    /// Kopie, die gegen den Uhrzeigersinn läuft (Fläche ≥ 0).
    fn to_counter_clockwise(&self) -> Polygon;

    /// Kopie, die im Uhrzeigersinn läuft (Fläche ≤ 0).
    fn to_clockwise(&self) -> Polygon;
}

/// Gibt die Orientierung eines Polygons an.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear, // Fläche exakt Null
}

impl PolygonProperties for Polygon {
    fn signed_area(&self) -> f32 {
        simple_geometry::signed_area(self.vertices())
    }

    fn orientation(&self) -> Orientation {
        let area = self.signed_area();
        if area > 0.0 {
            Orientation::CounterClockwise
        } else if area < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    fn contains_point(&self, point: Vec2) -> bool {
        let vertices = self.vertices();
        let n = vertices.len();
        let mut inside = false;
        if n == 0 {
            return inside;
        }

        let mut j = n - 1;
        for i in 0..n {
            let vi = vertices[i];
            let vj = vertices[j];
            // Die erste Bedingung schließt horizontale Kanten aus, die Division ist sicher.
            if (vi.y > point.y) != (vj.y > point.y)
                && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    fn vertex_centroid(&self) -> Option<Vec2> {
        let vertices = self.vertices();
        if vertices.is_empty() {
            return None;
        }
        let sum = vertices.iter().fold(Vec2::ZERO, |acc, &v| acc + v);
        Some(sum / vertices.len() as f32)
    }

    fn to_counter_clockwise(&self) -> Polygon {
        if self.signed_area() < 0.0 {
            self.reversed()
        } else {
            self.clone()
        }
    }

    fn to_clockwise(&self) -> Polygon {
        if self.signed_area() > 0.0 {
            self.reversed()
        } else {
            self.clone()
        }
    }
}
