// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    /// Quadrierter Abstand, unter dem erster und letzter Vertex als Schließ-Duplikat gelten.
    pub const CLOSING_DUPLICATE_DIST_SQ: f32 = 1e-6;
    /// Quadrierter Abstand, ab dem der Snapper die Schleife explizit schließt.
    pub const SNAP_CLOSE_DIST_SQ: f32 = 1.0;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }
}

/// Geometrische Hilfsfunktionen (einfach, ohne komplexe Strukturen)
pub mod simple_geometry {
    use bevy::math::Vec2;

    /// Quadrierter Abstand zwischen zwei Punkten
    pub fn distance_sq(p1: Vec2, p2: Vec2) -> f32 {
        (p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)
    }

    pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
        distance_sq(p1, p2).sqrt()
    }

    /// Kreuzprodukt der Kanten (a→b) und (b→c).
    /// Positiv bei Linkskurve, negativ bei Rechtskurve, Null bei Kollinearität.
    pub fn turn_cross(a: Vec2, b: Vec2, c: Vec2) -> f32 {
        (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x)
    }

    /// Vorzeichenbehaftete Fläche (Shoelace) einer implizit geschlossenen Vertex-Folge.
    pub fn signed_area(vertices: &[Vec2]) -> f32 {
        let n = vertices.len();
        let mut twice_area = 0.0;
        for i in 0..n {
            let p = vertices[i];
            let q = vertices[(i + 1) % n];
            twice_area += p.x * q.y - q.x * p.y;
        }
        0.5 * twice_area
    }

    /// Schwerpunkt eines Dreiecks
    pub fn triangle_centroid(a: Vec2, b: Vec2, c: Vec2) -> Vec2 {
        Vec2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::simple_geometry::*;
    use bevy::math::Vec2;

    #[test]
    fn test_signed_area_orientation() {
        let ccw = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert_eq!(signed_area(&ccw), 100.0);

        let mut cw = ccw;
        cw.reverse();
        assert_eq!(signed_area(&cw), -100.0);
        assert_eq!(signed_area(&[]), 0.0);
    }

    #[test]
    fn test_turn_cross_sign() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 0.0);
        assert!(turn_cross(a, b, Vec2::new(1.0, 1.0)) > 0.0);
        assert!(turn_cross(a, b, Vec2::new(1.0, -1.0)) < 0.0);
        assert_eq!(turn_cross(a, b, Vec2::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn test_distance_sq() {
        assert_eq!(distance_sq(Vec2::ZERO, Vec2::new(3.0, 4.0)), 25.0);
        assert_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
    }
}
