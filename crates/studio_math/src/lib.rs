// Re-export glam for convenience
pub use glam::*;

// Studio math types
mod ray;
mod rotation;
mod sampling;
mod vector;

pub use ray::Ray;
pub use rotation::Rotation;
pub use sampling::{random_vector, solve_quadratic};
pub use vector::Vec3Ext;
