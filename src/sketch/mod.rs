// src/sketch/mod.rs

pub mod config; // Modi und Schwellwerte
pub mod donut;
pub mod pipeline; // Stroke(s) → ShapeSnapshot
pub mod session;
pub mod strokes; // Synthetische Strokes für Demo und Tests

pub use config::{ShapeMode, SketchConfig, TriangleDisplay};
pub use donut::{DonutClassifier, DonutOptions, DonutResult, FullDonut, classify_donut};
pub use pipeline::{
    DonutShape, ShapeSnapshot, SingleShape, process_donut_strokes, process_single_stroke,
    recompute,
};
pub use session::{SketchSession, StrokeState};
pub use strokes::StrokeGenerator;
