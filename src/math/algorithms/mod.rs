// src/math/algorithms/mod.rs
pub mod simplification;

pub use simplification::simplify_stroke;
