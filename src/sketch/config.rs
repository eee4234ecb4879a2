// src/sketch/config.rs

use crate::math::{
    error::{MathError, MathResult},
    geometry::polygon::{
        AxisDominantSnapper, PolygonBuilder,
        builder::{BUILDER_MIN_DIST, DEFAULT_CLOSE_THRESHOLD},
        operations::circle_fit::DEFAULT_ROUNDNESS_THRESHOLD,
        snapping::DEFAULT_GRID_SIZE,
    },
};
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Zeichenmodus: bestimmt, welche Stufe nach dem Polygonbau läuft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeMode {
    /// L-Form, Zerlegung in zwei Rechtecke
    #[default]
    LRectangular,
    /// L-Form, Ear-Clipping
    LTriangulated,
    /// Donut, Ring-Rechtecke und Kreis-Fit
    DonutRectangular,
    /// Donut, Triangulation ohne das Loch
    DonutTriangulated,
    /// Beliebiges Polygon, Ear-Clipping
    GeneralTriangulated,
}

impl ShapeMode {
    pub const ALL: [ShapeMode; 5] = [
        ShapeMode::LRectangular,
        ShapeMode::LTriangulated,
        ShapeMode::DonutRectangular,
        ShapeMode::DonutTriangulated,
        ShapeMode::GeneralTriangulated,
    ];

    /// Donut-Modi sammeln zwei Strokes, alle anderen genau einen.
    pub fn is_donut(&self) -> bool {
        matches!(
            self,
            ShapeMode::DonutRectangular | ShapeMode::DonutTriangulated
        )
    }

    pub fn max_strokes(&self) -> usize {
        if self.is_donut() { 2 } else { 1 }
    }

    pub fn triangulates(&self) -> bool {
        matches!(
            self,
            ShapeMode::LTriangulated | ShapeMode::DonutTriangulated | ShapeMode::GeneralTriangulated
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeMode::LRectangular => "l_rect",
            ShapeMode::LTriangulated => "l_tri",
            ShapeMode::DonutRectangular => "donut_rect",
            ShapeMode::DonutTriangulated => "donut_tri",
            ShapeMode::GeneralTriangulated => "general",
        }
    }
}

/// Darstellung der Dreiecke; reine Render-Angelegenheit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriangleDisplay {
    #[default]
    Wire,
    Fill,
    Both,
}

impl TriangleDisplay {
    pub fn draws_outline(&self) -> bool {
        matches!(self, TriangleDisplay::Wire | TriangleDisplay::Both)
    }

    pub fn draws_fill(&self) -> bool {
        matches!(self, TriangleDisplay::Fill | TriangleDisplay::Both)
    }
}

/// Konfiguration der Skizzen-Pipeline.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub mode: ShapeMode,
    pub triangle_display: TriangleDisplay,
    /// Rasterabstand in Stroke-Koordinaten.
    pub grid_size: f32,
    /// `false` überspringt den Snapper, alle Folgestufen sehen das rohe Polygon.
    pub snap_enabled: bool,
    /// Mindestabstand beim Ausdünnen im Polygonbau.
    pub simplify_min_dist: f32,
    /// Abstand der Stroke-Enden, ab dem explizit geschlossen wird.
    pub close_threshold: f32,
    /// Variationskoeffizient, unter dem ein Ring als rund gilt.
    pub roundness_threshold: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            mode: ShapeMode::default(),
            triangle_display: TriangleDisplay::default(),
            grid_size: DEFAULT_GRID_SIZE,
            snap_enabled: true,
            simplify_min_dist: BUILDER_MIN_DIST,
            close_threshold: DEFAULT_CLOSE_THRESHOLD,
            roundness_threshold: DEFAULT_ROUNDNESS_THRESHOLD,
        }
    }
}

impl SketchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: ShapeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_triangle_display(mut self, display: TriangleDisplay) -> Self {
        self.triangle_display = display;
        self
    }

    pub fn with_grid_size(mut self, grid_size: f32) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_snap_enabled(mut self, enabled: bool) -> Self {
        self.snap_enabled = enabled;
        self
    }

    pub fn with_close_threshold(mut self, threshold: f32) -> Self {
        self.close_threshold = threshold;
        self
    }

    pub fn with_roundness_threshold(mut self, threshold: f32) -> Self {
        self.roundness_threshold = threshold;
        self
    }

    /// Polygon-Builder mit den konfigurierten Schwellen.
    pub fn polygon_builder(&self) -> PolygonBuilder {
        PolygonBuilder::new()
            .with_min_dist(self.simplify_min_dist)
            .with_close_threshold(self.close_threshold)
    }

    /// Snapper für das konfigurierte Raster, `None` bei abgeschaltetem Snapping.
    pub fn snapper(&self) -> Option<AxisDominantSnapper> {
        self.snap_enabled
            .then(|| AxisDominantSnapper::new(self.grid_size))
    }

    pub fn validate(&self) -> MathResult<()> {
        let positive = [
            ("grid_size", self.grid_size),
            ("simplify_min_dist", self.simplify_min_dist),
            ("roundness_threshold", self.roundness_threshold),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(MathError::InvalidConfiguration {
                    message: format!("{name} must be a positive finite number, got {value}"),
                });
            }
        }
        if !self.close_threshold.is_finite() || self.close_threshold < 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "close_threshold must be a non-negative finite number, got {}",
                    self.close_threshold
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SketchConfig::default();
        assert_eq!(config.grid_size, 25.0);
        assert_eq!(config.close_threshold, 10.0);
        assert!(config.snap_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_grid_is_rejected() {
        for grid in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let config = SketchConfig::new().with_grid_size(grid);
            assert!(matches!(
                config.validate(),
                Err(MathError::InvalidConfiguration { .. })
            ));
        }
        assert!(SketchConfig::new().with_close_threshold(-1.0).validate().is_err());
    }

    #[test]
    fn test_mode_properties() {
        assert_eq!(ShapeMode::DonutTriangulated.max_strokes(), 2);
        assert_eq!(ShapeMode::GeneralTriangulated.max_strokes(), 1);
        assert!(!ShapeMode::LRectangular.triangulates());
        assert!(ShapeMode::DonutTriangulated.triangulates());
        assert_eq!(ShapeMode::ALL.iter().filter(|m| m.is_donut()).count(), 2);
        assert!(TriangleDisplay::Both.draws_fill() && TriangleDisplay::Both.draws_outline());
    }

    #[test]
    fn test_snapper_follows_toggle() {
        let config = SketchConfig::new().with_grid_size(10.0);
        assert_eq!(config.snapper().map(|s| s.grid()), Some(10.0));
        assert!(config.with_snap_enabled(false).snapper().is_none());
    }
}
