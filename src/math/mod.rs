// src/math/mod.rs
pub mod algorithms;
pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::simplify_stroke,
        error::{MathError, MathResult},
        geometry::polygon::{
            CircleFit, Orientation, Polygon, PolygonBuilder, PolygonProperties, SnapStrategy,
            Triangle, concave_flags, decompose_l, polygon_from_stroke, snap_to_grid, triangulate,
        },
        types::*,
    };
}
