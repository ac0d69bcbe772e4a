//! Studio Core - scene model and geometry shared by both renderers.
//!
//! This crate provides:
//!
//! - **Scene types**: `Material`, `Sphere`, `Triangle`, `Primitive`, `Scene`
//! - **Intersection**: ray-sphere, Möller-Trumbore ray-triangle and a
//!   closest-hit scan over a primitive list
//! - **Depth ordering**: a stable key sort used for back-to-front compositing
//! - **Configuration**: camera/environment settings with serde defaults
//!
//! # Example
//!
//! ```ignore
//! use studio_core::{find_closest_hit, Scene};
//! use studio_math::{Ray, Vec3};
//!
//! let scene = Scene::demo();
//! let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
//! if let Some(hit) = find_closest_hit(scene.primitives(), &ray) {
//!     println!("hit at {:.2}", hit.distance);
//! }
//! ```

pub mod config;
pub mod geometry;
pub mod hit;
pub mod material;
pub mod scene;
pub mod sort;

// Re-export commonly used types
pub use config::{ConfigError, Environment, StudioConfig};
pub use geometry::{cube, quad, Primitive, Sphere, Triangle};
pub use hit::{find_closest_hit, hit_sphere, hit_triangle, HitInfo};
pub use material::{Color, Material};
pub use scene::Scene;
pub use sort::{sorted_indices, stable_sort_by_key, KeyedIndex, SortOrder};
