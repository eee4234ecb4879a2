// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Polygon is degenerate: only {remaining} usable vertices remain")]
    DegeneratePolygon { remaining: usize },

    #[error(
        "Ear clipping stopped with {remaining} unresolved vertices after {produced} triangles"
    )]
    UnresolvedTriangulation { remaining: usize, produced: usize },

    #[error("Polygon has no concave vertex")]
    NoConcaveVertex,

    #[error("Donut needs two valid strokes, got {strokes}")]
    IncompleteDonut { strokes: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

pub type MathResult<T> = Result<T, MathError>;
