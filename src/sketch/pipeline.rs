// src/sketch/pipeline.rs

use crate::math::{
    geometry::polygon::{
        Polygon, SnapStrategy, Triangle, TriangulationUtils, concave_flags, decompose_l,
        triangulate,
    },
    types::Bounds2D,
};
use crate::sketch::config::{ShapeMode, SketchConfig};
use crate::sketch::donut::{DonutOptions, DonutResult, classify_donut};
use bevy::log::{debug, info};
use bevy::math::Vec2;
use serde::Serialize;

/// Ergebnis der Pipeline für einen einzelnen Stroke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleShape {
    pub mode: ShapeMode,
    /// Ungesnapptes Polygon, gegen den Uhrzeigersinn.
    pub raw: Polygon,
    /// Parallel zu `raw.vertices()`.
    pub concave_flags: Vec<bool>,
    /// Gesnappter Umriss; identisch mit `raw`, wenn Snapping aus ist.
    pub snapped: Polygon,
    pub bounds: Option<Bounds2D>,
    /// Nur im Modus `LRectangular`; leer ohne Kerbe.
    pub rectangles: Vec<Bounds2D>,
    pub triangles: Vec<Triangle>,
    pub triangle_bounds: Vec<Bounds2D>,
}

/// Ergebnis der Pipeline für die Donut-Modi.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutShape {
    pub mode: ShapeMode,
    pub result: DonutResult,
    /// Nur im Modus `DonutTriangulated` und erst mit beiden Ringen.
    pub triangles: Vec<Triangle>,
    pub triangle_bounds: Vec<Bounds2D>,
}

/// Aktuelle Form; wird nach jeder Neuberechnung komplett ersetzt.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum ShapeSnapshot {
    #[default]
    Empty,
    Single(SingleShape),
    Donut(DonutShape),
}

impl ShapeSnapshot {
    pub fn is_empty(&self) -> bool {
        matches!(self, ShapeSnapshot::Empty)
    }

    pub fn triangles(&self) -> &[Triangle] {
        match self {
            ShapeSnapshot::Empty => &[],
            ShapeSnapshot::Single(shape) => &shape.triangles,
            ShapeSnapshot::Donut(shape) => &shape.triangles,
        }
    }

    /// Alle gesnappten Umrisse (ein Ring, oder Außen- und Innenring).
    pub fn snapped_outlines(&self) -> Vec<&Polygon> {
        match self {
            ShapeSnapshot::Empty => Vec::new(),
            ShapeSnapshot::Single(shape) => vec![&shape.snapped],
            ShapeSnapshot::Donut(shape) => match shape.result.full() {
                Some(donut) => vec![&donut.snapped_outer, &donut.snapped_inner],
                None => vec![shape.result.snapped_outer()],
            },
        }
    }
}

/// Verarbeitet einen Stroke in den Einzelform-Modi.
///
/// Konkave Flags beziehen sich auf das rohe Polygon, Zerlegung und
/// Triangulation auf den gesnappten Umriss.
pub fn process_single_stroke(stroke: &[Vec2], config: &SketchConfig) -> Option<SingleShape> {
    let raw = match config.polygon_builder().build(stroke) {
        Ok(polygon) => polygon,
        Err(err) => {
            debug!("Stroke ignored: {}", err);
            return None;
        }
    };

    let flags = concave_flags(&raw);
    let snapped = match config.snapper() {
        Some(snapper) => snapper.snap(&raw),
        None => raw.clone(),
    };
    let bounds = snapped.bounds();

    let rectangles = match config.mode {
        ShapeMode::LRectangular => decompose_l(&snapped),
        _ => Vec::new(),
    };
    let triangles = if config.mode.triangulates() {
        triangulate(&snapped)
    } else {
        Vec::new()
    };
    let triangle_bounds = TriangulationUtils::triangle_bounds(&triangles);

    Some(SingleShape {
        mode: config.mode,
        raw,
        concave_flags: flags,
        snapped,
        bounds,
        rectangles,
        triangles,
        triangle_bounds,
    })
}

/// Verarbeitet die gesammelten Strokes in den Donut-Modi.
pub fn process_donut_strokes<S: AsRef<[Vec2]>>(
    strokes: &[S],
    config: &SketchConfig,
) -> Option<DonutShape> {
    let result = classify_donut(strokes, DonutOptions::from(config))?;

    let hole = match (&result, config.mode) {
        (DonutResult::Full(donut), ShapeMode::DonutTriangulated) => {
            donut.hole_filtered_triangulation()
        }
        _ => Default::default(),
    };

    Some(DonutShape {
        mode: config.mode,
        result,
        triangles: hole.triangles,
        triangle_bounds: hole.boxes,
    })
}

/// Berechnet die komplette Form aus allen Strokes neu.
pub fn recompute<S: AsRef<[Vec2]>>(strokes: &[S], config: &SketchConfig) -> ShapeSnapshot {
    let snapshot = if config.mode.is_donut() {
        process_donut_strokes(strokes, config).map(ShapeSnapshot::Donut)
    } else {
        strokes
            .last()
            .and_then(|stroke| process_single_stroke(stroke.as_ref(), config))
            .map(ShapeSnapshot::Single)
    }
    .unwrap_or_default();

    info!(
        "Shape recomputed: mode {}, {} strokes, {} triangles",
        config.mode.as_str(),
        strokes.len(),
        snapshot.triangles().len()
    );
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::PolygonProperties;
    use approx::assert_relative_eq;

    fn square_stroke() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(0.0, 0.0),
        ]
    }

    fn l_stroke() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 50.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(50.0, 100.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(0.0, 0.0),
        ]
    }

    #[test]
    fn test_square_scenario() {
        let config = SketchConfig::new().with_mode(ShapeMode::LRectangular);
        let shape = process_single_stroke(&square_stroke(), &config).unwrap();

        assert_eq!(shape.raw.len(), 5);
        assert!(shape.raw.signed_area() > 0.0);
        assert!(shape.concave_flags.iter().all(|&f| !f));
        assert_eq!(shape.snapped, shape.raw);
        assert!(shape.rectangles.is_empty());
        assert_eq!(
            shape.bounds,
            Some(Bounds2D::from_extents(0.0, 0.0, 100.0, 100.0))
        );

        let config = config.with_mode(ShapeMode::GeneralTriangulated);
        let shape = process_single_stroke(&square_stroke(), &config).unwrap();
        assert_eq!(shape.triangles.len(), 2);
        assert_eq!(shape.triangle_bounds.len(), 2);
        assert_relative_eq!(TriangulationUtils::total_area(&shape.triangles), 10000.0);
    }

    #[test]
    fn test_l_scenario_rectangles_and_triangles() {
        let config = SketchConfig::new();
        let shape = process_single_stroke(&l_stroke(), &config).unwrap();
        assert_eq!(
            shape.rectangles,
            vec![
                Bounds2D::from_extents(0.0, 0.0, 100.0, 50.0),
                Bounds2D::from_extents(0.0, 50.0, 50.0, 100.0),
            ]
        );
        assert!(shape.triangles.is_empty());
        assert_eq!(shape.concave_flags.iter().filter(|&&f| f).count(), 1);

        let config = config.with_mode(ShapeMode::LTriangulated);
        let shape = process_single_stroke(&l_stroke(), &config).unwrap();
        assert!(shape.rectangles.is_empty());
        assert_relative_eq!(TriangulationUtils::total_area(&shape.triangles), 7500.0);
    }

    #[test]
    fn test_snap_disabled_keeps_raw_outline() {
        let wobbly = vec![
            Vec2::new(2.0, -3.0),
            Vec2::new(98.0, 4.0),
            Vec2::new(103.0, 52.0),
            Vec2::new(-4.0, 47.0),
        ];
        let config = SketchConfig::new().with_snap_enabled(false);
        let shape = process_single_stroke(&wobbly, &config).unwrap();
        assert_eq!(shape.snapped, shape.raw);

        let snapped = process_single_stroke(&wobbly, &config.with_snap_enabled(true)).unwrap();
        assert_ne!(snapped.snapped, snapped.raw);
    }

    #[test]
    fn test_two_point_stroke_gives_empty_snapshot() {
        let stroke = vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)];
        assert!(process_single_stroke(&stroke, &SketchConfig::default()).is_none());
        assert!(recompute(&[stroke], &SketchConfig::default()).is_empty());
    }

    #[test]
    fn test_single_modes_use_last_stroke() {
        let strokes = vec![vec![Vec2::ZERO, Vec2::X], square_stroke()];
        let snapshot = recompute(&strokes, &SketchConfig::default());
        assert_eq!(snapshot.snapped_outlines().len(), 1);
    }

    #[test]
    fn test_donut_triangles_only_in_triangulated_mode() {
        let outer: Vec<Vec2> = square_stroke().iter().map(|&p| p * 3.0).collect();
        let inner: Vec<Vec2> = square_stroke()
            .iter()
            .map(|&p| p * 0.5 + Vec2::splat(125.0))
            .collect();
        let strokes = vec![outer, inner];

        let rect = SketchConfig::new().with_mode(ShapeMode::DonutRectangular);
        let shape = process_donut_strokes(&strokes, &rect).unwrap();
        assert!(shape.triangles.is_empty());
        assert!(shape.result.full().is_some());

        let tri = rect.with_mode(ShapeMode::DonutTriangulated);
        let snapshot = recompute(&strokes, &tri);
        assert_eq!(snapshot.snapped_outlines().len(), 2);
        let ShapeSnapshot::Donut(shape) = snapshot else {
            panic!("expected donut snapshot");
        };
        assert!(!shape.triangles.is_empty());
        assert_eq!(shape.triangles.len(), shape.triangle_bounds.len());
        let hole = &shape.result.full().unwrap().snapped_inner;
        assert!(
            shape
                .triangles
                .iter()
                .all(|t| !hole.contains_point(t.centroid()))
        );
    }

    #[test]
    fn test_donut_single_stroke_is_preview() {
        let config = SketchConfig::new().with_mode(ShapeMode::DonutRectangular);
        let snapshot = recompute(&[square_stroke()], &config);
        let ShapeSnapshot::Donut(shape) = snapshot else {
            panic!("expected donut snapshot");
        };
        assert!(shape.result.full().is_none());
        assert_eq!(shape.result.snapped_outer().len(), 5);
    }
}
