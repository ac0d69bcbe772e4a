//! Progressive path tracer example.
//!
//! Renders the demo scene for a number of passes and saves the
//! accumulated image as PNG.

use anyhow::{Context, Result};
use studio_renderer::{Environment, PathTracer, Scene, TraceConfig, TraceScene};

fn main() -> Result<()> {
    env_logger::init();

    let passes: u32 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()
        .context("pass count must be a number")?
        .unwrap_or(16);

    let scene = TraceScene::from_editor_scene(&Scene::demo());
    let config = TraceConfig::default();
    let mut tracer = PathTracer::new(scene, Environment::default(), config)?;

    println!(
        "Rendering {}x{} for {} passes...",
        tracer.config().width,
        tracer.config().height,
        passes
    );

    let start = std::time::Instant::now();
    for _ in 0..passes {
        tracer.accumulate_pass()?;
    }
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    tracer
        .image()
        .to_image()
        .context("pixel buffer size does not match dimensions")?
        .save(filename)
        .context("failed to save image")?;
    println!("Saved to {}", filename);

    Ok(())
}
