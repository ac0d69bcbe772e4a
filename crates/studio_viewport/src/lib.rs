//! Studio Viewport - real-time preview renderer.
//!
//! Projects the scene through a pointer-driven pinhole camera and emits 2D
//! draw commands, farthest first, for an external drawing surface. A
//! level-of-detail controller subdivides or merges triangles each frame to
//! keep the primitive count near a budget.
//!
//! Per frame, call `update` with the pointer position and then `render`
//! with the current scene.

mod camera;
mod context;
mod draw;
mod lod;
mod renderer;
mod shading;

pub use camera::ViewCamera;
pub use context::RenderContext;
pub use draw::{DrawCommand, Frame, Rgb8};
pub use lod::{apply_detail, group, subdivide, LodController};
pub use renderer::{PointerInput, RealtimeRenderer};
pub use shading::{draw_command, shade, sky_fill, sphere_screen_radius};
