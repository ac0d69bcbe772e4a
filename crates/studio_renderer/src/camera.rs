//! Camera for ray generation.

use rand::RngCore;
use studio_math::{random_vector, Ray, Vec3};

/// Pinhole camera at the world origin looking down -Z.
///
/// Pixels map to normalised device coordinates on the plane `z = -1`,
/// widened by the aspect ratio, with a small random offset per sample
/// for anti-aliasing.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    /// Magnitude of the per-sample offset on the image plane
    pub jitter: f32,
}

impl Camera {
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            jitter: 0.002,
        }
    }

    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Point on the image plane for pixel (x, y), before jitter.
    ///
    /// Y is flipped so row 0 is the top of the image.
    pub fn image_plane_point(&self, x: u32, y: u32) -> Vec3 {
        let width = self.image_width as f32;
        let height = self.image_height as f32;

        let mut coord = Vec3::new(x as f32, height - y as f32, 1.0) / Vec3::new(width, height, 1.0);
        coord = coord * 2.0 - 1.0;
        coord.z = -1.0;
        coord.x *= self.aspect_ratio();
        coord
    }

    /// Generate a jittered ray for pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray {
        let target = self.image_plane_point(x, y) + random_vector(rng) * self.jitter;
        Ray::new(Vec3::ZERO, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_image_plane_corners() {
        let camera = Camera::new(200, 100);

        // Top-left pixel maps to the upper-left of the plane
        let top_left = camera.image_plane_point(0, 0);
        assert_eq!(top_left, Vec3::new(-2.0, 1.0, -1.0));

        let centre = camera.image_plane_point(100, 50);
        assert_eq!(centre, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_ray_direction() {
        let camera = Camera::new(100, 100);
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.get_ray(50, 50, &mut rng);
        assert_eq!(ray.origin, Vec3::ZERO);
        assert!(ray.direction.z < 0.0);
        assert!((ray.direction.length() - 1.0).abs() < 1e-5);
        // Jitter stays small
        assert!(ray.direction.x.abs() < 0.01 && ray.direction.y.abs() < 0.01);
    }

    #[test]
    fn test_no_jitter_is_deterministic() {
        let camera = Camera::new(64, 48).with_jitter(0.0);
        let a = camera.get_ray(3, 7, &mut StdRng::seed_from_u64(1));
        let b = camera.get_ray(3, 7, &mut StdRng::seed_from_u64(2));
        assert_eq!(a, b);
    }
}
