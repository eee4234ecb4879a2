// src/math/geometry/polygon/operations/circle_fit.rs
use super::super::{Polygon, PolygonProperties};
use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Schwelle für den Rundheitsfehler.
pub const DEFAULT_ROUNDNESS_THRESHOLD: f32 = 0.2;

/// Einfacher Kreis-Fit: Vertex-Schwerpunkt, mittlerer Radius und
/// Variationskoeffizient der Radien als Rundheitsfehler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleFit {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    pub ratio: f32,
}

impl CircleFit {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.cx, self.cy)
    }

    pub fn is_round(&self, threshold: f32) -> bool {
        self.ratio < threshold
    }
}

/// Passt einen Kreis an alle gespeicherten Vertices an. `None` für leere Polygone.
pub fn fit_circle(polygon: &Polygon) -> Option<CircleFit> {
    let center = polygon.vertex_centroid()?;
    let vertices = polygon.vertices();
    let count = vertices.len() as f32;

    let radii: Vec<f32> = vertices.iter().map(|&v| v.distance(center)).collect();
    let mean = radii.iter().sum::<f32>() / count;
    let variance = radii.iter().map(|r| (r - mean).powi(2)).sum::<f32>() / count;
    // Bei mean == 0 ergibt sich NaN; NaN ist nie "rund".
    let ratio = variance.sqrt() / mean;

    Some(CircleFit {
        cx: center.x,
        cy: center.y,
        r: mean,
        ratio,
    })
}

/// Kreis-Fit plus Rundheitsentscheidung.
pub fn is_round(polygon: &Polygon, threshold: f32) -> (bool, Option<CircleFit>) {
    let fit = fit_circle(polygon);
    (fit.is_some_and(|f| f.is_round(threshold)), fit)
}
