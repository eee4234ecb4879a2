// src/math/geometry/polygon/snapping.rs

use crate::math::geometry::polygon::core::Polygon;
use crate::math::utils::{constants::SNAP_CLOSE_DIST_SQ, simple_geometry::distance_sq};
use bevy::math::Vec2;

/// Standard-Rasterabstand.
pub const DEFAULT_GRID_SIZE: f32 = 25.0;

/// Austauschbare Strategie, die ein Polygon auf ein achsenparalleles Raster bringt.
pub trait SnapStrategy {
    fn snap(&self, polygon: &Polygon) -> Polygon;
}

/// Gieriger Rechtwinkel-Snapper.
///
/// Jede Kante wird anhand der *ungesnappten* Quellkante entweder horizontal
/// (|dx| ≥ |dy|) oder vertikal gelegt; nur die Koordinate in Kantenrichtung wird
/// ans Raster gezogen, die andere vom vorherigen Vertex übernommen. Kanten der
/// Länge Null fallen weg. Das verzerrt diagonale Formen bewusst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDominantSnapper {
    grid: f32,
}

impl Default for AxisDominantSnapper {
    fn default() -> Self {
        Self {
            grid: DEFAULT_GRID_SIZE,
        }
    }
}

impl AxisDominantSnapper {
    pub fn new(grid: f32) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> f32 {
        self.grid
    }

    /// Rundet auf das nächste Vielfache des Rasters (x.5 rundet nach oben).
    fn snap_value(&self, value: f32) -> f32 {
        let q = value / self.grid;
        let f = q.floor();
        // q - f ist exakt, `q + 0.5` dagegen rundet knapp unter .5 auf
        let steps = if q - f >= 0.5 { f + 1.0 } else { f };
        steps * self.grid
    }

    fn snap_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(self.snap_value(point.x), self.snap_value(point.y))
    }

    fn is_horizontal(from: Vec2, to: Vec2) -> bool {
        (to.x - from.x).abs() >= (to.y - from.y).abs()
    }
}

impl SnapStrategy for AxisDominantSnapper {
    fn snap(&self, polygon: &Polygon) -> Polygon {
        let raw = polygon.vertices();
        if raw.len() < 2 {
            return polygon.clone();
        }

        let mut prev = self.snap_point(raw[0]);
        let mut snapped = vec![prev];

        for edge in raw.windows(2) {
            let (a, b) = (edge[0], edge[1]);
            let next = if Self::is_horizontal(a, b) {
                Vec2::new(self.snap_value(b.x), prev.y)
            } else {
                Vec2::new(prev.x, self.snap_value(b.y))
            };
            if next != prev {
                snapped.push(next);
                prev = next;
            }
        }

        let first = snapped[0];
        let last = prev;
        if distance_sq(first, last) > SNAP_CLOSE_DIST_SQ {
            // Schließkante ebenfalls rechtwinklig halten
            if first.x != last.x && first.y != last.y {
                let corner = if Self::is_horizontal(raw[raw.len() - 1], raw[0]) {
                    Vec2::new(first.x, last.y)
                } else {
                    Vec2::new(last.x, first.y)
                };
                snapped.push(corner);
            }
            snapped.push(first);
        }

        Polygon::new(snapped)
    }
}

/// Snapt mit dem Standard-Snapper und gegebenem Raster.
pub fn snap_to_grid(polygon: &Polygon, grid: f32) -> Polygon {
    AxisDominantSnapper::new(grid).snap(polygon)
}

/// Prüft, ob alle Kanten (inklusive der Schließkante) horizontal oder vertikal sind.
pub fn is_rectilinear(polygon: &Polygon) -> bool {
    let vertices = polygon.vertices();
    let n = vertices.len();
    (0..n).all(|i| {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        a.x == b.x || a.y == b.y
    })
}
