// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use serde::{Deserialize, Serialize};

/// 2D Bounding Box (Axis-Aligned Bounding Box).
///
/// Dient gleichzeitig als Rechteck-Typ der L-Zerlegung und der Donut-Ringe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> MathResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box aus den vier Kanten-Koordinaten, ohne zu prüfen.
    pub fn from_extents(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Point2D::new(min_x, min_y),
            max: Point2D::new(max_x, max_y),
        }
    }

    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    pub fn min_x(&self) -> f32 {
        self.min.x
    }

    pub fn min_y(&self) -> f32 {
        self.min.y
    }

    pub fn max_x(&self) -> f32 {
        self.max.x
    }

    pub fn max_y(&self) -> f32 {
        self.max.y
    }

    /// Prüft ob die Bounding Box leer ist
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Zentrum der Bounding Box
    pub fn center(&self) -> Point2D {
        (self.min + self.max) * 0.5
    }

    /// Fläche der Bounding Box
    pub fn area(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.width() * self.height()
        }
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt (Rand inklusive)
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Kleinste Box, die beide umschließt
    pub fn union(&self, other: &Bounds2D) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}
