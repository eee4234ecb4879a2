// src/math/geometry/polygon/core.rs

use crate::math::{
    types::Bounds2D,
    utils::{constants::CLOSING_DUPLICATE_DIST_SQ, simple_geometry::distance_sq},
};
use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Geschlossener Vertex-Ring.
///
/// Der Ring ist immer implizit geschlossen: die letzte Kante führt vom letzten
/// zum ersten Vertex. Zusätzlich darf er einen expliziten Schließ-Vertex tragen,
/// der (nahezu) auf dem ersten Vertex liegt. Builder, Konkavitäts-Analyse und
/// Snapper reichen diesen Vertex unverändert durch; wer einen Ring ohne
/// Duplikat braucht, nimmt [`Polygon::open_vertices`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    /// Gibt einen Slice der Vertices zurück (inklusive eines eventuellen Schließ-Duplikats).
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn first(&self) -> Option<Vec2> {
        self.vertices.first().copied()
    }

    pub fn last(&self) -> Option<Vec2> {
        self.vertices.last().copied()
    }

    /// Prüft, ob der letzte Vertex ein Duplikat des ersten ist.
    pub fn has_closing_duplicate(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(&first), Some(&last)) if self.vertices.len() > 1 => {
                distance_sq(first, last) < CLOSING_DUPLICATE_DIST_SQ
            }
            _ => false,
        }
    }

    /// Vertices ohne Schließ-Duplikat.
    pub fn open_vertices(&self) -> &[Vec2] {
        if self.has_closing_duplicate() {
            &self.vertices[..self.vertices.len() - 1]
        } else {
            &self.vertices
        }
    }

    /// Ein Polygon braucht mindestens drei verschiedene Vertices.
    pub fn is_valid(&self) -> bool {
        self.open_vertices().len() >= 3
    }

    /// Kopie mit umgekehrter Vertex-Reihenfolge.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Achsenparallele Bounding Box aller gespeicherten Vertices.
    pub fn bounds(&self) -> Option<Bounds2D> {
        Bounds2D::from_points_iter(self.vertices.iter().copied())
    }
}
