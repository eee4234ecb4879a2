// src/debug/visualization/svg.rs
use crate::math::{
    geometry::polygon::{CircleFit, Polygon, Triangle},
    types::Bounds2D,
};
use crate::sketch::{
    config::TriangleDisplay,
    donut::DonutResult,
    pipeline::{DonutShape, ShapeSnapshot, SingleShape},
};
use bevy::log::info;
use bevy::math::Vec2;
use std::path::Path;
use svg::Document;
use svg::node::element::{Circle, Rectangle, Style};

/// Welche Ebenen gezeichnet werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotLayers {
    pub raw: bool,
    pub snapped: bool,
    pub boxes: bool,
    pub rectangles: bool,
    pub circles: bool,
    pub concave: bool,
}

impl Default for SnapshotLayers {
    fn default() -> Self {
        Self {
            raw: true,
            snapped: true,
            boxes: true,
            rectangles: true,
            circles: true,
            concave: true,
        }
    }
}

// ===================================================================================
// HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
struct SvgBuilder {
    document: Document,
    // Markergröße relativ zur ViewBox
    point_radius: f32,
}

impl SvgBuilder {
    /// Erstellt das Grundgerüst mit ViewBox, Stil und Hintergrund.
    fn new(display_bounds: &Bounds2D, svg_pixel_size: f32) -> Self {
        let min = display_bounds.min;
        let (width, height) = (display_bounds.width(), display_bounds.height());

        let stroke_w_normal = (width + height) / 2.0 * 0.005;
        let stroke_w_thin = (width + height) / 2.0 * 0.002;
        let point_radius = (width + height) / 2.0 * 0.006;

        let style = Style::new(format!(
            r#"
    .raw {{ fill: none; stroke: #999999; stroke-width: {stroke_w_thin}; stroke-dasharray: 4,3; }}
    .snapped {{ fill: rgba(120, 170, 255, 0.15); stroke: #1f4fbf; stroke-width: {stroke_w_normal}; }}
    .concave {{ fill: #d62728; }}
    .bounds {{ fill: none; stroke: #888888; stroke-width: {stroke_w_thin}; stroke-dasharray: 2,2; }}
    .hole {{ fill: #ffffff; stroke: #c77800; stroke-width: {stroke_w_thin}; stroke-dasharray: 6,3; }}
    .rectangle {{ fill: rgba(255, 200, 90, 0.35); stroke: #c77800; stroke-width: {stroke_w_normal}; }}
    .circle {{ fill: none; stroke: #2ca02c; stroke-width: {stroke_w_normal}; }}
    .triangle-fill {{ fill: rgba(150, 120, 230, 0.45); stroke: none; }}
    .triangle-wire {{ fill: none; stroke: #5500aa; stroke-width: {stroke_w_thin}; }}
    .triangle-box {{ fill: none; stroke: #bbbbbb; stroke-width: {stroke_w_thin}; }}
"#
        ));

        let document = Document::new()
            .set("width", svg_pixel_size)
            .set("height", svg_pixel_size)
            .set("viewBox", (min.x, min.y, width, height))
            .add(style)
            .add(
                Rectangle::new()
                    .set("x", min.x)
                    .set("y", min.y)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", "#f0f0f0"),
            );

        Self {
            document,
            point_radius,
        }
    }

    fn add<T: Into<Box<dyn svg::Node>>>(self, node: T) -> Self {
        Self {
            document: self.document.add(node),
            ..self
        }
    }

    fn polygon(self, vertices: &[Vec2], class: &str) -> Self {
        if vertices.len() < 2 {
            return self;
        }
        let points = vertices
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.add(
            svg::node::element::Polygon::new()
                .set("points", points)
                .set("class", class),
        )
    }

    fn rect(self, bounds: &Bounds2D, class: &str) -> Self {
        self.add(
            Rectangle::new()
                .set("x", bounds.min.x)
                .set("y", bounds.min.y)
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("class", class),
        )
    }

    fn circle(self, center: Vec2, radius: f32, class: &str) -> Self {
        self.add(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", radius)
                .set("class", class),
        )
    }

    fn triangles(mut self, triangles: &[Triangle], display: TriangleDisplay) -> Self {
        for t in triangles {
            let corners = [t.a, t.b, t.c];
            if display.draws_fill() {
                self = self.polygon(&corners, "triangle-fill");
            }
            if display.draws_outline() {
                self = self.polygon(&corners, "triangle-wire");
            }
        }
        self
    }

    fn finish(self) -> Document {
        self.document
    }
}

/// Umschließende Box aller Punkte plus Rand, damit Konturen nicht am Bildrand kleben.
fn display_bounds_for(snapshot: &ShapeSnapshot) -> Bounds2D {
    let bounds = snapshot
        .snapped_outlines()
        .into_iter()
        .chain(raw_rings(snapshot))
        .filter_map(Polygon::bounds)
        .reduce(|acc, b| acc.union(&b))
        .unwrap_or_else(|| Bounds2D::from_extents(0.0, 0.0, 100.0, 100.0));
    let margin = (bounds.width().max(bounds.height()) * 0.1).max(10.0);
    Bounds2D::from_extents(
        bounds.min_x() - margin,
        bounds.min_y() - margin,
        bounds.max_x() + margin,
        bounds.max_y() + margin,
    )
}

fn raw_rings(snapshot: &ShapeSnapshot) -> Vec<&Polygon> {
    match snapshot {
        ShapeSnapshot::Empty => Vec::new(),
        ShapeSnapshot::Single(shape) => vec![&shape.raw],
        ShapeSnapshot::Donut(shape) => match &shape.result {
            DonutResult::OuterOnly { outer_raw, .. } => vec![outer_raw],
            DonutResult::Full(donut) => vec![&donut.outer_raw, &donut.inner_raw],
        },
    }
}

fn draw_single(
    mut svg: SvgBuilder,
    shape: &SingleShape,
    layers: SnapshotLayers,
    display: TriangleDisplay,
) -> SvgBuilder {
    if layers.rectangles {
        for rect in &shape.rectangles {
            svg = svg.rect(rect, "rectangle");
        }
    }
    svg = svg.triangles(&shape.triangles, display);
    if layers.boxes {
        for b in shape.triangle_bounds.iter().chain(shape.bounds.as_ref()) {
            svg = svg.rect(b, "bounds");
        }
    }
    if layers.concave {
        let radius = svg.point_radius;
        let concave = shape
            .raw
            .vertices()
            .iter()
            .zip(&shape.concave_flags)
            .filter(|&(_, &flag)| flag);
        for (&vertex, _) in concave {
            svg = svg.circle(vertex, radius, "concave");
        }
    }
    svg
}

fn draw_donut(
    mut svg: SvgBuilder,
    shape: &DonutShape,
    layers: SnapshotLayers,
    display: TriangleDisplay,
) -> SvgBuilder {
    svg = svg.triangles(&shape.triangles, display);
    if layers.boxes {
        for b in &shape.triangle_bounds {
            svg = svg.rect(b, "triangle-box");
        }
    }
    let Some(donut) = shape.result.full() else {
        return svg;
    };
    if layers.rectangles {
        svg = svg
            .rect(&donut.rectangles.outer, "rectangle")
            .rect(&donut.rectangles.inner, "hole");
    }
    if layers.circles {
        if let Some(circles) = donut.circles {
            let fits: [CircleFit; 2] = [circles.outer, circles.inner];
            for fit in fits {
                svg = svg.circle(fit.center(), fit.r, "circle");
            }
        }
    }
    svg
}

/// Baut das SVG-Dokument einer Form.
pub fn snapshot_document(
    snapshot: &ShapeSnapshot,
    layers: SnapshotLayers,
    display: TriangleDisplay,
    svg_pixel_size: f32,
) -> Document {
    let bounds = display_bounds_for(snapshot);
    let mut svg = SvgBuilder::new(&bounds, svg_pixel_size);

    if layers.raw {
        for ring in raw_rings(snapshot) {
            svg = svg.polygon(ring.vertices(), "raw");
        }
    }
    if layers.snapped {
        for outline in snapshot.snapped_outlines() {
            svg = svg.polygon(outline.vertices(), "snapped");
        }
    }

    svg = match snapshot {
        ShapeSnapshot::Empty => svg,
        ShapeSnapshot::Single(shape) => draw_single(svg, shape, layers, display),
        ShapeSnapshot::Donut(shape) => draw_donut(svg, shape, layers, display),
    };
    svg.finish()
}

/// Schreibt eine Form als SVG-Datei.
pub fn write_snapshot_svg(
    snapshot: &ShapeSnapshot,
    display: TriangleDisplay,
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    let document = snapshot_document(snapshot, SnapshotLayers::default(), display, 800.0);
    svg::save(path.as_ref(), &document)?;
    info!("Debug SVG '{}' wurde erstellt.", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketch::{ShapeMode, SketchConfig, recompute};

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

    fn count(text: &str, needle: &str) -> usize {
        text.matches(needle).count()
    }

    #[test]
    fn test_l_rectangles_are_rendered() {
        let snapshot = recompute(&[l_stroke()], &SketchConfig::default());
        let text = snapshot_document(
            &snapshot,
            SnapshotLayers::default(),
            TriangleDisplay::Wire,
            400.0,
        )
        .to_string();

        assert_eq!(count(&text, "class=\"rectangle\""), 2);
        assert_eq!(count(&text, "class=\"concave\""), 1);
        assert_eq!(count(&text, "class=\"snapped\""), 1);
    }

    #[test]
    fn test_triangle_display_controls_layers() {
        let config = SketchConfig::new().with_mode(ShapeMode::LTriangulated);
        let snapshot = recompute(&[l_stroke()], &config);
        let triangles = snapshot.triangles().len();
        assert_eq!(triangles, 4);

        let render = |display| {
            snapshot_document(&snapshot, SnapshotLayers::default(), display, 400.0).to_string()
        };
        let wire = render(TriangleDisplay::Wire);
        assert_eq!(count(&wire, "triangle-wire\""), triangles);
        assert_eq!(count(&wire, "triangle-fill\""), 0);

        let both = render(TriangleDisplay::Both);
        assert_eq!(count(&both, "triangle-wire\""), triangles);
        assert_eq!(count(&both, "triangle-fill\""), triangles);
    }

    #[test]
    fn test_display_bounds_cover_raw_and_snapped() {
        let snapshot = recompute(&[l_stroke()], &SketchConfig::default());
        // L-Form 0..100, Rand 10% bzw. mindestens 10
        assert_eq!(
            display_bounds_for(&snapshot),
            Bounds2D::from_extents(-10.0, -10.0, 110.0, 110.0)
        );
        assert_eq!(
            display_bounds_for(&ShapeSnapshot::Empty),
            Bounds2D::from_extents(-10.0, -10.0, 110.0, 110.0)
        );
    }

    #[test]
    fn test_empty_snapshot_still_renders() {
        let layers = SnapshotLayers {
            raw: false,
            ..Default::default()
        };
        let text =
            snapshot_document(&ShapeSnapshot::Empty, layers, TriangleDisplay::Fill, 200.0)
                .to_string();
        assert!(text.contains("<svg"));
        assert_eq!(count(&text, "<polygon"), 0);
    }
}
