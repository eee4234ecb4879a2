// src/math/geometry/mod.rs

pub mod polygon;

// Polygon-Exporte
pub use self::polygon::{
    AxisDominantSnapper, CircleFit, Orientation, Polygon, PolygonBuilder, PolygonProperties,
    PolygonTriangulator, SnapStrategy, Triangle, TriangulationOutcome, TriangulationUtils,
};
