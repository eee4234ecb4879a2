// src/math/geometry/polygon/mod.rs

// Deklaration der Untermodule für Polygon-spezifische Funktionalität
pub mod builder; // Stroke → Polygon
pub mod concavity;
pub mod core; // Enthält die Polygon-Struktur selbst
pub mod operations; // Zerlegung, Triangulation, Kreis-Fit
pub mod properties; // Enthält den PolygonProperties-Trait
pub mod snapping;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Polygon-Elemente
pub use self::builder::{PolygonBuilder, polygon_from_stroke};
pub use self::concavity::{concave_flags, concave_vertices, first_concave_index};
pub use self::core::Polygon;
pub use self::properties::{Orientation, PolygonProperties};
pub use self::snapping::{AxisDominantSnapper, SnapStrategy, is_rectilinear, snap_to_grid};

pub use self::operations::{
    circle_fit::{CircleFit, fit_circle, is_round},
    decomposition::{decompose_l, try_decompose_l},
    triangulation::{
        PolygonTriangulator, Triangle, TriangulationOutcome, TriangulationUtils, triangulate,
    },
};
