// src/math/geometry/polygon/operations/triangulation.rs
use super::super::{Polygon, PolygonProperties};
use crate::math::{error::*, types::Bounds2D, utils::*};
use bevy::log::warn;
use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Triangle representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    /// Berechnet die Fläche des Dreiecks
    pub fn area(&self) -> f32 {
        0.5 * ((self.b.x - self.a.x) * (self.c.y - self.a.y)
            - (self.c.x - self.a.x) * (self.b.y - self.a.y))
            .abs()
    }

    pub fn centroid(&self) -> Vec2 {
        simple_geometry::triangle_centroid(self.a, self.b, self.c)
    }

    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_extents(
            self.a.x.min(self.b.x).min(self.c.x),
            self.a.y.min(self.b.y).min(self.c.y),
            self.a.x.max(self.b.x).max(self.c.x),
            self.a.y.max(self.b.y).max(self.c.y),
        )
    }

    /// Prüft ob ein Punkt im Dreieck liegt (Rand inklusive, ohne Toleranz)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let sign = |p1: Vec2, p2: Vec2, p3: Vec2| -> f32 {
            (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
        };

        let d1 = sign(point, self.a, self.b);
        let d2 = sign(point, self.b, self.c);
        let d3 = sign(point, self.c, self.a);

        let has_neg = (d1 < 0.0) || (d2 < 0.0) || (d3 < 0.0);
        let has_pos = (d1 > 0.0) || (d2 > 0.0) || (d3 > 0.0);

        !(has_neg && has_pos)
    }
}

/// Ergebnis einer Ear-Clipping-Triangulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangulationOutcome {
    pub triangles: Vec<Triangle>,
    /// Anzahl Vertices, für die kein Ohr mehr gefunden wurde (0 = vollständig).
    pub unresolved: usize,
}

impl TriangulationOutcome {
    pub fn is_complete(&self) -> bool {
        self.unresolved == 0
    }

    /// Wandelt einen unvollständigen Lauf in einen Fehler um.
    pub fn into_complete(self) -> MathResult<Vec<Triangle>> {
        if self.is_complete() {
            Ok(self.triangles)
        } else {
            Err(MathError::UnresolvedTriangulation {
                remaining: self.unresolved,
                produced: self.triangles.len(),
            })
        }
    }
}

/// Ear-Clipping-Triangulator für einfache Polygone. Worst case O(n³).
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonTriangulator;

impl PolygonTriangulator {
    pub fn new() -> Self {
        Self
    }

    /// Trianguliert ein Polygon.
    ///
    /// Ein Schließ-Duplikat wird entfernt und die Orientierung auf gegen den
    /// Uhrzeigersinn gezwungen. Findet der Scan kein Ohr mehr, endet der Lauf
    /// mit den bisher erzeugten Dreiecken; der Rest steht in `unresolved`.
    pub fn triangulate(&self, polygon: &Polygon) -> MathResult<TriangulationOutcome> {
        let mut vertices = polygon.open_vertices().to_vec();

        if vertices.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: vertices.len(),
            });
        }

        if simple_geometry::signed_area(&vertices) < 0.0 {
            vertices.reverse();
        }

        Ok(self.ear_clipping(&vertices))
    }

    /// Ear Clipping Algorithmus über eine zyklische Index-Liste
    fn ear_clipping(&self, vertices: &[Vec2]) -> TriangulationOutcome {
        let mut triangles = Vec::with_capacity(vertices.len().saturating_sub(2));
        let mut remaining: Vec<usize> = (0..vertices.len()).collect();

        while remaining.len() > 3 {
            let ear = (0..remaining.len()).find(|&i| Self::is_ear(vertices, &remaining, i));

            let Some(i) = ear else {
                return TriangulationOutcome {
                    triangles,
                    unresolved: remaining.len(),
                };
            };

            let (prev, curr, next) = Self::neighbours(&remaining, i);
            triangles.push(Triangle::new(vertices[prev], vertices[curr], vertices[next]));
            remaining.remove(i);
        }

        if let [a, b, c] = remaining[..] {
            triangles.push(Triangle::new(vertices[a], vertices[b], vertices[c]));
        }

        TriangulationOutcome {
            triangles,
            unresolved: 0,
        }
    }

    fn neighbours(remaining: &[usize], i: usize) -> (usize, usize, usize) {
        let n = remaining.len();
        (remaining[(i + n - 1) % n], remaining[i], remaining[(i + 1) % n])
    }

    /// Prüft ob der Vertex an Position `i` ein "Ear" ist
    fn is_ear(vertices: &[Vec2], remaining: &[usize], i: usize) -> bool {
        let (prev, curr, next) = Self::neighbours(remaining, i);
        let (a, b, c) = (vertices[prev], vertices[curr], vertices[next]);

        // 1. Streng konvex (Linkskurve)
        if simple_geometry::turn_cross(a, b, c) <= 0.0 {
            return false;
        }

        // 2. Kein anderer verbleibender Vertex im oder auf dem Dreieck
        let triangle = Triangle::new(a, b, c);
        !remaining
            .iter()
            .filter(|&&j| j != prev && j != curr && j != next)
            .any(|&j| triangle.contains_point(vertices[j]))
    }
}

/// Nachsichtige Triangulation: ungültige Eingaben liefern eine leere Liste,
/// ein unvollständiger Lauf die bis dahin erzeugten Dreiecke.
pub fn triangulate(polygon: &Polygon) -> Vec<Triangle> {
    match PolygonTriangulator::new().triangulate(polygon) {
        Ok(outcome) => {
            if !outcome.is_complete() {
                warn!(
                    "Ear clipping left {} vertices unresolved ({} triangles kept, polygon area {:.1})",
                    outcome.unresolved,
                    outcome.triangles.len(),
                    polygon.area()
                );
            }
            outcome.triangles
        }
        Err(_) => Vec::new(),
    }
}

/// Triangulations-Utilities
pub struct TriangulationUtils;

impl TriangulationUtils {
    /// Berechnet die Gesamtfläche einer Triangulation
    pub fn total_area(triangles: &[Triangle]) -> f32 {
        triangles.iter().map(|t| t.area()).sum()
    }

    /// Bounding Box jedes Dreiecks
    pub fn triangle_bounds(triangles: &[Triangle]) -> Vec<Bounds2D> {
        triangles.iter().map(Triangle::bounds).collect()
    }

    /// Validiert eine Triangulation gegen die Polygonfläche (relative Toleranz)
    pub fn validate_triangulation(triangles: &[Triangle], original_area: f32) -> bool {
        let triangulation_area = Self::total_area(triangles);
        comparison::nearly_equal_eps(
            triangulation_area,
            original_area,
            original_area.abs().max(1.0) * 1e-4,
        )
    }
}
