//! Studio path tracer - progressive CPU rendering.
//!
//! A Monte Carlo path tracer that adds one sample per pixel per pass into
//! an accumulation buffer and displays the running average. Image noise
//! drops with every pass; the caller decides when to stop.
//!
//! Pixels are traced in parallel on a bounded rayon pool and only
//! integrated once a whole pass has finished, so the buffer always holds
//! an average of complete passes.

mod accumulation;
mod camera;
mod config;
mod error;
mod renderer;
mod scene;
mod tracer;

pub use accumulation::{AccumulationBuffer, PixelBuffer};
pub use camera::Camera;
pub use config::TraceConfig;
pub use error::RenderError;
pub use renderer::{FrameSamples, PathTracer};
pub use scene::TraceScene;
pub use tracer::{reflect, render_pixel, sky_colour, trace_path};

/// Re-export common types from studio_core and studio_math
pub use studio_core::{Color, Environment, Material, Primitive, Scene};
pub use studio_math::Vec3;
