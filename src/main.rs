// ./src/main.rs
use bevy::log::LogPlugin;
use bevy::prelude::*;
use std::path::PathBuf;

use sketch_shapes::debug::visualization::write_snapshot_svg;
use sketch_shapes::sketch::{
    ShapeMode, SketchConfig, SketchSession, StrokeGenerator, TriangleDisplay,
};

/// Ausgabeverzeichnis der Demo-SVGs.
#[derive(Resource, Debug, Clone)]
struct OutputDir(PathBuf);

impl Default for OutputDir {
    fn default() -> Self {
        Self(std::env::temp_dir().join("sketch_shapes"))
    }
}

fn main() {
    // Ohne Runner-Plugin läuft genau ein Update, danach endet die App.
    App::new()
        .add_plugins(LogPlugin::default())
        .init_resource::<SketchConfig>()
        .init_resource::<OutputDir>()
        .add_systems(Startup, run_demo_sketches)
        .run();
}

/// Synthetische Strokes für einen Modus.
fn demo_strokes(mode: ShapeMode, generator: &mut StrokeGenerator) -> Vec<Vec<Vec2>> {
    match mode {
        ShapeMode::LRectangular | ShapeMode::LTriangulated => {
            vec![generator.l_shape(Vec2::new(60.0, 60.0), 300.0, 140.0)]
        }
        ShapeMode::DonutRectangular => vec![
            generator.rectangle(Vec2::new(50.0, 50.0), Vec2::new(400.0, 300.0)),
            generator.rectangle(Vec2::new(150.0, 120.0), Vec2::new(300.0, 220.0)),
        ],
        ShapeMode::DonutTriangulated => vec![
            generator.circle(Vec2::splat(250.0), 200.0, 96),
            generator.circle(Vec2::splat(250.0), 80.0, 48),
        ],
        ShapeMode::GeneralTriangulated => vec![generator.polyline(
            &[
                Vec2::new(50.0, 50.0),
                Vec2::new(350.0, 80.0),
                Vec2::new(260.0, 200.0),
                Vec2::new(380.0, 340.0),
                Vec2::new(90.0, 300.0),
            ],
            true,
        )],
    }
}

fn run_demo_sketches(config: Res<SketchConfig>, output: Res<OutputDir>) {
    if let Err(err) = config.validate() {
        error!("Invalid sketch configuration: {}", err);
        return;
    }
    if let Err(err) = std::fs::create_dir_all(&output.0) {
        error!("Could not create {}: {}", output.0.display(), err);
        return;
    }

    let mut generator = StrokeGenerator::new(Some(2024))
        .with_jitter(2.5)
        .with_spacing(6.0);
    for mode in ShapeMode::ALL {
        let display = if mode.triangulates() {
            TriangleDisplay::Both
        } else {
            config.triangle_display
        };
        let mut session = SketchSession::new(
            (*config)
                .clone()
                .with_mode(mode)
                .with_triangle_display(display),
        );

        for stroke in demo_strokes(mode, &mut generator) {
            let state = session.complete_stroke(stroke);
            debug!("{}: stroke accepted, state {:?}", mode.as_str(), state);
        }

        if session.snapshot().is_empty() {
            warn!("{}: demo strokes produced no shape", mode.as_str());
            continue;
        }

        let path = output.0.join(format!("{}.svg", mode.as_str()));
        if let Err(err) = write_snapshot_svg(session.snapshot(), display, &path) {
            error!("Could not write {}: {}", path.display(), err);
        }
    }
    info!("Demo sketches written to {}", output.0.display());
}
