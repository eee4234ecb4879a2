// src/math/geometry/polygon/operations/decomposition.rs
use super::super::{Polygon, concavity::first_concave_index};
use crate::math::{error::*, types::Bounds2D};
use bevy::log::debug;

/// Zerlegt ein gesnapptes L-Polygon am ersten konkaven Vertex in zwei Rechtecke.
///
/// Das untere Rechteck spannt die volle Breite der Bounding Box von `min_y` bis
/// zur y-Koordinate der Ecke, das linke Rechteck reicht von `min_x` bis zur
/// x-Koordinate der Ecke und von deren y bis `max_y`. Weitere konkave Vertices
/// werden ignoriert, für Formen mit mehreren Kerben ist die Überdeckung falsch.
pub fn try_decompose_l(polygon: &Polygon) -> MathResult<[Bounds2D; 2]> {
    let corner_index = first_concave_index(polygon).ok_or(MathError::NoConcaveVertex)?;
    let corner = polygon.vertices()[corner_index];
    let bounds = polygon.bounds().ok_or(MathError::InsufficientPoints {
        expected: 3,
        actual: 0,
    })?;

    let bottom = Bounds2D::from_extents(bounds.min_x(), bounds.min_y(), bounds.max_x(), corner.y);
    let left = Bounds2D::from_extents(bounds.min_x(), corner.y, corner.x, bounds.max_y());

    Ok([bottom, left])
}

/// Liefert 0 Rechtecke für konvexe Formen, sonst genau 2.
pub fn decompose_l(polygon: &Polygon) -> Vec<Bounds2D> {
    match try_decompose_l(polygon) {
        Ok(rects) => rects.to_vec(),
        Err(err) => {
            debug!("L decomposition skipped: {}", err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;

    #[test]
    fn test_l_shape_splits_into_two_rectangles() {
        let l = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 50.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(50.0, 100.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(0.0, 0.0),
        ]);

        let rects = decompose_l(&l);
        assert_eq!(
            rects,
            vec![
                Bounds2D::from_extents(0.0, 0.0, 100.0, 50.0),
                Bounds2D::from_extents(0.0, 50.0, 50.0, 100.0),
            ]
        );
        let covered: f32 = rects.iter().map(Bounds2D::area).sum();
        assert_eq!(covered, 7500.0);
    }

    #[test]
    fn test_rectangle_has_no_decomposition() {
        let square = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(0.0, 0.0),
        ]);
        assert!(decompose_l(&square).is_empty());
        assert_eq!(try_decompose_l(&square), Err(MathError::NoConcaveVertex));
    }

    #[test]
    fn test_first_of_several_notches_is_used() {
        // U-Form mit zwei Kerben-Ecken bei (30,60) und (70,60)
        let u = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(70.0, 100.0),
            Vec2::new(70.0, 60.0),
            Vec2::new(30.0, 60.0),
            Vec2::new(30.0, 100.0),
            Vec2::new(0.0, 100.0),
        ]);
        let [bottom, left] = try_decompose_l(&u).unwrap();
        assert_eq!(bottom.max_y(), 60.0);
        assert_eq!(left.max_x(), 70.0);
    }
}
