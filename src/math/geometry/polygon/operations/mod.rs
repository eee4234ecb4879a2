// src/math/geometry/polygon/operations/mod.rs
pub mod circle_fit;
pub mod decomposition;
pub mod triangulation;
