//! Surface material shared by the real-time preview and the path tracer.

use serde::{Deserialize, Serialize};
use studio_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Surface appearance of a primitive.
///
/// `shine` blends between a diffuse (0) and a mirror (1) bounce in the
/// path tracer. Any `emission` above zero marks the surface as a light:
/// it adds light when traced and skips distance falloff in the preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Albedo, each channel in [0, 1]
    pub colour: Color,
    /// Specular weight in [0, 1]
    pub shine: f32,
    /// Emitted intensity in [0, 1]
    pub emission: f32,
}

impl Material {
    pub fn new(colour: Color, shine: f32, emission: f32) -> Self {
        Self {
            colour,
            shine,
            emission,
        }
    }

    /// Create a material from 0-255 channel values.
    pub fn from_rgb8(rgb: [u8; 3], shine: f32, emission: f32) -> Self {
        let colour = Vec3::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32) / 255.0;
        Self::new(colour, shine, emission)
    }

    /// Plain diffuse, non-emissive material.
    pub fn diffuse(colour: Color) -> Self {
        Self::new(colour, 0.0, 0.0)
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emission != 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Vec3::splat(0.5)) // Grey default
    }
}
