// src/math/geometry/polygon/concavity.rs

use crate::math::geometry::polygon::{core::Polygon, properties::PolygonProperties};
use crate::math::utils::simple_geometry::turn_cross;
use bevy::math::Vec2;

/// Markiert reflexe (konkave) Vertices anhand der lokalen Drehrichtung.
///
/// Die Flags laufen parallel zu `polygon.vertices()`, ein eventuelles
/// Schließ-Duplikat eingeschlossen. Da dessen Nachbarkante Länge Null hat,
/// wird es nie markiert. Bei Fläche exakt Null sind alle Flags `false`.
pub fn concave_flags(polygon: &Polygon) -> Vec<bool> {
    let vertices = polygon.vertices();
    let n = vertices.len();
    let mut flags = vec![false; n];

    let area = polygon.signed_area();
    if area == 0.0 {
        return flags;
    }
    let ccw = area > 0.0;

    for i in 0..n {
        let prev = vertices[(i + n - 1) % n];
        let curr = vertices[i];
        let next = vertices[(i + 1) % n];
        let z = turn_cross(prev, curr, next);
        flags[i] = (ccw && z < 0.0) || (!ccw && z > 0.0);
    }
    flags
}

/// Index des ersten konkaven Vertex.
pub fn first_concave_index(polygon: &Polygon) -> Option<usize> {
    concave_flags(polygon).iter().position(|&concave| concave)
}

/// Alle konkaven Vertices in Ring-Reihenfolge.
pub fn concave_vertices(polygon: &Polygon) -> Vec<Vec2> {
    polygon
        .vertices()
        .iter()
        .zip(concave_flags(polygon))
        .filter_map(|(&v, concave)| concave.then_some(v))
        .collect()
}
