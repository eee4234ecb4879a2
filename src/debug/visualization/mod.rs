// src/debug/visualization/mod.rs
pub mod svg; // SVG-Dumps der aktuellen Form

pub use self::svg::{SnapshotLayers, snapshot_document, write_snapshot_svg};
