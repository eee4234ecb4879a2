// src/sketch/session.rs

use crate::math::error::MathResult;
use crate::sketch::config::{ShapeMode, SketchConfig, TriangleDisplay};
use crate::sketch::pipeline::{ShapeSnapshot, recompute};
use bevy::log::debug;
use bevy::math::Vec2;
use bevy::prelude::Resource;

/// Fortschritt der Stroke-Sammlung.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StrokeState {
    #[default]
    Empty,
    /// Im Donut-Modus: Außenring liegt vor, Innenring fehlt noch.
    OneStroke,
    Complete,
}

/// Sammelt Strokes und hält die jeweils aktuelle Form.
///
/// Jede Änderung (Stroke, Modus, Raster, Snapping) berechnet die Form aus
/// den gespeicherten Strokes neu und ersetzt den Snapshot als Ganzes.
#[derive(Resource, Debug, Clone, Default)]
pub struct SketchSession {
    config: SketchConfig,
    strokes: Vec<Vec<Vec2>>,
    current: Vec<Vec2>,
    drawing: bool,
    snapshot: ShapeSnapshot,
}

impl SketchSession {
    pub fn new(config: SketchConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn strokes(&self) -> &[Vec<Vec2>] {
        &self.strokes
    }

    /// Der gerade gezeichnete, noch nicht abgeschlossene Stroke.
    pub fn current_stroke(&self) -> &[Vec2] {
        &self.current
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn snapshot(&self) -> &ShapeSnapshot {
        &self.snapshot
    }

    pub fn state(&self) -> StrokeState {
        match (self.strokes.len(), self.config.mode.is_donut()) {
            (0, _) => StrokeState::Empty,
            (1, true) => StrokeState::OneStroke,
            _ => StrokeState::Complete,
        }
    }

    /// Zeiger gedrückt: ein neuer Stroke beginnt.
    pub fn begin_stroke(&mut self, point: Vec2) {
        self.drawing = true;
        self.current = vec![point];
    }

    /// Zeiger bewegt; ignoriert, solange nicht gezeichnet wird.
    pub fn extend_stroke(&mut self, point: Vec2) {
        if self.drawing {
            self.current.push(point);
        }
    }

    /// Zeiger losgelassen: Endpunkt anhängen und Stroke abschließen.
    pub fn end_stroke(&mut self, point: Vec2) -> StrokeState {
        if !self.drawing {
            return self.state();
        }
        self.drawing = false;
        self.current.push(point);
        let stroke = std::mem::take(&mut self.current);
        self.complete_stroke(stroke)
    }

    /// Zeiger hat die Zeichenfläche verlassen: der begonnene Stroke wird verworfen,
    /// gesammelte Strokes und Form bleiben unverändert.
    pub fn abort_stroke(&mut self) {
        self.drawing = false;
        self.current.clear();
    }

    /// Übernimmt einen fertigen Stroke.
    ///
    /// Einzelform-Modi ersetzen den vorhandenen Stroke, Donut-Modi nehmen
    /// höchstens zwei an; ein dritter wird verworfen.
    pub fn complete_stroke(&mut self, stroke: Vec<Vec2>) -> StrokeState {
        self.current.clear();
        if self.config.mode.is_donut() {
            if self.strokes.len() >= self.config.mode.max_strokes() {
                debug!("Donut already complete, stroke with {} points dropped", stroke.len());
                return self.state();
            }
            self.strokes.push(stroke);
        } else {
            self.strokes = vec![stroke];
        }
        self.refresh();
        self.state()
    }

    /// Wechselt den Modus und verwirft alle Strokes.
    pub fn set_mode(&mut self, mode: ShapeMode) {
        self.config.mode = mode;
        self.clear();
    }

    pub fn set_grid_size(&mut self, grid_size: f32) -> MathResult<()> {
        let candidate = self.config.clone().with_grid_size(grid_size);
        candidate.validate()?;
        self.config = candidate;
        self.refresh();
        Ok(())
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.config.snap_enabled = enabled;
        self.refresh();
    }

    /// Reine Darstellungsoption, die Form bleibt unverändert.
    pub fn set_triangle_display(&mut self, display: TriangleDisplay) {
        self.config.triangle_display = display;
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current.clear();
        self.drawing = false;
        self.snapshot = ShapeSnapshot::Empty;
    }

    fn refresh(&mut self) {
        self.snapshot = if self.strokes.is_empty() {
            ShapeSnapshot::Empty
        } else {
            recompute(&self.strokes, &self.config)
        };
    }
}
