// src/sketch/donut.rs

use crate::math::{
    error::{MathError, MathResult},
    geometry::polygon::{
        AxisDominantSnapper, CircleFit, Polygon, PolygonBuilder, PolygonProperties, SnapStrategy,
        Triangle, TriangulationUtils, fit_circle, triangulate,
    },
    types::Bounds2D,
};
use crate::sketch::config::SketchConfig;
use bevy::log::debug;
use bevy::math::Vec2;
use serde::Serialize;

/// Parameter des Donut-Klassifikators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutOptions {
    pub builder: PolygonBuilder,
    pub grid_size: f32,
    pub snap_enabled: bool,
    pub roundness_threshold: f32,
}

impl Default for DonutOptions {
    fn default() -> Self {
        Self::from(&SketchConfig::default())
    }
}

impl From<&SketchConfig> for DonutOptions {
    fn from(config: &SketchConfig) -> Self {
        Self {
            builder: config.polygon_builder(),
            grid_size: config.grid_size,
            snap_enabled: config.snap_enabled,
            roundness_threshold: config.roundness_threshold,
        }
    }
}

/// Bounding Boxes beider gesnappter Ringe. Das innere Rechteck ist als Aussparung gedacht.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DonutRectangles {
    pub outer: Bounds2D,
    pub inner: Bounds2D,
}

/// Kreis-Fits beider Ringe; existiert nur, wenn beide rund sind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DonutCircles {
    pub outer: CircleFit,
    pub inner: CircleFit,
}

/// Triangulation des Außenrings ohne die Dreiecke im Loch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HoleTriangulation {
    pub triangles: Vec<Triangle>,
    pub boxes: Vec<Bounds2D>,
}

/// Vollständig klassifizierter Donut aus zwei Strokes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullDonut {
    /// Gegen den Uhrzeigersinn.
    pub outer_raw: Polygon,
    /// Im Uhrzeigersinn.
    pub inner_raw: Polygon,
    pub snapped_outer: Polygon,
    pub snapped_inner: Polygon,
    pub rectangles: DonutRectangles,
    pub circles: Option<DonutCircles>,
}

impl FullDonut {
    pub fn is_circular(&self) -> bool {
        self.circles.is_some()
    }

    pub fn hole_filtered_triangulation(&self) -> HoleTriangulation {
        hole_filtered_triangulation(&self.snapped_outer, Some(&self.snapped_inner))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DonutResult {
    /// Nur der erste Stroke liegt vor: Vorschau des Außenrings.
    OuterOnly {
        outer_raw: Polygon,
        snapped_outer: Polygon,
    },
    Full(FullDonut),
}

impl DonutResult {
    pub fn outer_raw(&self) -> &Polygon {
        match self {
            DonutResult::OuterOnly { outer_raw, .. } => outer_raw,
            DonutResult::Full(donut) => &donut.outer_raw,
        }
    }

    pub fn snapped_outer(&self) -> &Polygon {
        match self {
            DonutResult::OuterOnly { snapped_outer, .. } => snapped_outer,
            DonutResult::Full(donut) => &donut.snapped_outer,
        }
    }

    pub fn full(&self) -> Option<&FullDonut> {
        match self {
            DonutResult::OuterOnly { .. } => None,
            DonutResult::Full(donut) => Some(donut),
        }
    }
}

/// Orchestriert zwei parallele Polygon-Pipelines und trennt Außen- von Innenring.
#[derive(Debug, Clone, Copy, Default)]
pub struct DonutClassifier {
    options: DonutOptions,
}

impl DonutClassifier {
    pub fn new(options: DonutOptions) -> Self {
        Self { options }
    }

    fn snap(&self, polygon: &Polygon) -> Polygon {
        if self.options.snap_enabled {
            AxisDominantSnapper::new(self.options.grid_size).snap(polygon)
        } else {
            polygon.clone()
        }
    }

    /// Klassifiziert ein oder zwei Strokes. Weitere Strokes werden ignoriert.
    pub fn classify<S: AsRef<[Vec2]>>(&self, strokes: &[S]) -> MathResult<DonutResult> {
        let first = strokes
            .first()
            .ok_or(MathError::IncompleteDonut { strokes: 0 })?;
        let poly_a = self.options.builder.build(first.as_ref())?;

        let Some(second) = strokes.get(1) else {
            let outer_raw = poly_a.to_counter_clockwise();
            let snapped_outer = self.snap(&outer_raw);
            return Ok(DonutResult::OuterOnly {
                outer_raw,
                snapped_outer,
            });
        };
        let poly_b = self.options.builder.build(second.as_ref())?;

        // Bei gleicher Fläche gewinnt der zweite Stroke
        let (outer, inner) = if poly_a.area() > poly_b.area() {
            (poly_a, poly_b)
        } else {
            (poly_b, poly_a)
        };
        let outer_raw = outer.to_counter_clockwise();
        let inner_raw = inner.to_clockwise();

        let snapped_outer = self.snap(&outer_raw);
        let snapped_inner = self.snap(&inner_raw);

        let rectangles = donut_rectangles(&snapped_outer, &snapped_inner).ok_or(
            MathError::DegeneratePolygon {
                remaining: snapped_outer.len().min(snapped_inner.len()),
            },
        )?;
        let circles = donut_circles(&outer_raw, &inner_raw, self.options.roundness_threshold);

        debug!(
            "Donut classified: outer area {:.1}, inner area {:.1}, circular: {}",
            outer_raw.area(),
            inner_raw.area(),
            circles.is_some()
        );

        Ok(DonutResult::Full(FullDonut {
            outer_raw,
            inner_raw,
            snapped_outer,
            snapped_inner,
            rectangles,
            circles,
        }))
    }
}

/// Nachsichtige Variante: alles, was keinen Donut (oder keine Vorschau) ergibt, ist `None`.
pub fn classify_donut<S: AsRef<[Vec2]>>(
    strokes: &[S],
    options: DonutOptions,
) -> Option<DonutResult> {
    match DonutClassifier::new(options).classify(strokes) {
        Ok(result) => Some(result),
        Err(err) => {
            debug!("No donut yet: {}", err);
            None
        }
    }
}

/// Bounding Boxes beider Ringe, unabhängig voneinander.
pub fn donut_rectangles(
    snapped_outer: &Polygon,
    snapped_inner: &Polygon,
) -> Option<DonutRectangles> {
    Some(DonutRectangles {
        outer: snapped_outer.bounds()?,
        inner: snapped_inner.bounds()?,
    })
}

/// Kreis-Fit beider roher Ringe; nur wenn beide unter der Schwelle liegen.
pub fn donut_circles(
    outer_raw: &Polygon,
    inner_raw: &Polygon,
    threshold: f32,
) -> Option<DonutCircles> {
    let outer = fit_circle(outer_raw)?;
    let inner = fit_circle(inner_raw)?;
    (outer.is_round(threshold) && inner.is_round(threshold))
        .then_some(DonutCircles { outer, inner })
}

/// Trianguliert den Außenring und verwirft jedes Dreieck, dessen Schwerpunkt im Loch liegt.
pub fn hole_filtered_triangulation(
    snapped_outer: &Polygon,
    snapped_inner: Option<&Polygon>,
) -> HoleTriangulation {
    let mut triangles = triangulate(snapped_outer);
    if let Some(hole) = snapped_inner {
        triangles.retain(|triangle| !hole.contains_point(triangle.centroid()));
    }
    let boxes = TriangulationUtils::triangle_bounds(&triangles);
    HoleTriangulation { triangles, boxes }
}
