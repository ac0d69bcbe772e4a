//! Progressive render sessions.
//!
//! A `PathTracer` owns the accumulation buffer for one session. Each pass
//! traces one sample for every pixel on the worker pool, then integrates
//! the finished pass into the buffer on the calling thread.

use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use studio_core::{Color, Environment};

use crate::tracer::render_pixel;
use crate::{AccumulationBuffer, Camera, PixelBuffer, RenderError, TraceConfig, TraceScene};

/// One complete pass of samples, in row-major pixel order.
///
/// Dropping it instead of integrating is how a caller abandons a pass
/// without disturbing the running average.
#[derive(Debug, Clone)]
pub struct FrameSamples {
    frame: u32,
    samples: Vec<Color>,
}

impl FrameSamples {
    /// Index of the pass these samples were traced for.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn samples(&self) -> &[Color] {
        &self.samples
    }
}

/// A path tracing session over a fixed scene.
pub struct PathTracer {
    scene: TraceScene,
    environment: Environment,
    config: TraceConfig,
    camera: Camera,
    accumulation: AccumulationBuffer,
    pool: ThreadPool,
}

impl PathTracer {
    /// Start a new session.
    pub fn new(
        scene: TraceScene,
        environment: Environment,
        config: TraceConfig,
    ) -> Result<Self, RenderError> {
        config.validate()?;
        environment.validate()?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("studio-trace-{i}"))
            .build()?;

        info!(
            "Path tracer session {}x{}, {} primitives, {} bounces, {} threads",
            config.width,
            config.height,
            scene.len(),
            config.max_bounces,
            pool.current_num_threads()
        );

        let camera = Camera::new(config.width, config.height).with_jitter(config.jitter);
        let accumulation = AccumulationBuffer::new(config.width, config.height);

        Ok(Self {
            scene,
            environment,
            config,
            camera,
            accumulation,
            pool,
        })
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    pub fn accumulation(&self) -> &AccumulationBuffer {
        &self.accumulation
    }

    /// Number of passes integrated so far.
    pub fn frames(&self) -> u32 {
        self.accumulation.frames()
    }

    /// Trace one sample per pixel without touching the buffer.
    ///
    /// Every pixel draws from its own RNG seeded by session seed, frame and
    /// pixel index, so results do not depend on thread scheduling.
    pub fn render_pass(&self) -> FrameSamples {
        let frame = self.accumulation.frames();
        let width = self.config.width;
        let primitives = self.scene.primitives();

        let samples = self.pool.install(|| {
            (0..self.config.pixel_count())
                .into_par_iter()
                .map(|index| {
                    let x = (index % width as usize) as u32;
                    let y = (index / width as usize) as u32;
                    let mut rng = StdRng::seed_from_u64(pixel_seed(self.config.seed, frame, index));
                    render_pixel(
                        primitives,
                        &self.camera,
                        x,
                        y,
                        &self.environment,
                        &self.config,
                        &mut rng,
                    )
                })
                .collect()
        });

        FrameSamples { frame, samples }
    }

    /// Add a finished pass to the running average.
    pub fn integrate(&mut self, pass: FrameSamples) -> Result<(), RenderError> {
        self.accumulation.add_pass(&pass.samples)
    }

    /// Trace and integrate one pass, returning the updated image.
    pub fn accumulate_pass(&mut self) -> Result<PixelBuffer, RenderError> {
        let start = Instant::now();
        let pass = self.render_pass();
        self.integrate(pass)?;

        debug!(
            "Pass {} finished in {:?}",
            self.accumulation.frames(),
            start.elapsed()
        );
        Ok(self.accumulation.to_pixels())
    }

    /// Current averaged image.
    pub fn image(&self) -> PixelBuffer {
        self.accumulation.to_pixels()
    }

    /// Discard all accumulated passes and start over.
    pub fn reset(&mut self) {
        self.accumulation.reset();
    }
}

/// Mix session seed, frame and pixel index into one RNG seed (SplitMix64 finaliser).
fn pixel_seed(seed: u64, frame: u32, index: usize) -> u64 {
    let mut z = seed
        ^ (frame as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (index as u64).wrapping_mul(0xD1B5_4A32_D192_ED03);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
