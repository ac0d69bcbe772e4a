//! Vector helpers layered on top of glam's `Vec3`.
//!
//! glam already covers scalar broadcasting (`v + 1.0`), componentwise
//! products, `dot` and `cross`. This trait adds the zero-safe
//! normalisation and angle queries the renderers rely on.

use glam::Vec3;

/// Extension trait for Vec3 with renderer-specific vector queries.
pub trait Vec3Ext {
    /// Euclidean length of the vector.
    fn mag(&self) -> f32;

    /// Unit vector in the same direction.
    ///
    /// The zero vector (or anything too small to invert its length)
    /// normalises to the zero vector instead of producing NaNs.
    fn normalise(&self) -> Vec3;

    /// Angle between two vectors, in degrees.
    ///
    /// Zero-length inputs yield NaN.
    fn angle_to(&self, other: Vec3) -> f32;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn mag(&self) -> f32 {
        self.length()
    }

    #[inline]
    fn normalise(&self) -> Vec3 {
        self.normalize_or_zero()
    }

    fn angle_to(&self, other: Vec3) -> f32 {
        let cosine = self.dot(other) / (self.mag() * other.mag());
        // Rounding can push parallel vectors just outside acos' domain
        cosine.clamp(-1.0, 1.0).acos().to_degrees()
    }
}
