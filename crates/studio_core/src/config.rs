//! Camera and environment configuration.
//!
//! Every field has a default, so partial JSON documents deserialize into a
//! complete configuration. Parsing works on strings only; reading files is
//! the caller's concern.

use serde::{Deserialize, Serialize};
use studio_math::{Vec2, Vec3};
use thiserror::Error;

/// Errors produced while building or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Polygon budget must be at least 1")]
    ZeroPolygonBudget,

    #[error("Focal length must be a positive finite number, got {0}")]
    InvalidFocalLength(f32),

    #[error("Sky light must be a non-negative finite number, got {0}")]
    InvalidSkyLight(f32),
}

/// Sky tint and intensity.
///
/// Fills the real-time background and lights rays that escape the scene
/// in the path tracer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Multiplicative RGB tint
    pub sky_tint: Vec3,
    /// Sky intensity
    pub sky_light: f32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            sky_tint: Vec3::new(1.0, 1.0, 1.7),
            sky_light: 0.8,
        }
    }
}

impl Environment {
    pub fn new(sky_tint: Vec3, sky_light: f32) -> Self {
        Self {
            sky_tint,
            sky_light,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sky_light.is_finite() || self.sky_light < 0.0 {
            return Err(ConfigError::InvalidSkyLight(self.sky_light));
        }
        Ok(())
    }
}

/// Settings for the real-time renderer session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Camera position before pointer rotation is applied
    pub base_camera_position: Vec3,
    /// Pinhole focal length in pixels
    pub focal_length: f32,
    /// Target number of primitives drawn per frame
    pub polygon_budget: usize,
    /// Sky settings
    pub environment: Environment,
    /// Constant on-screen offset added after projection
    pub screen_translation: Vec2,
    /// Start with the built-in demo scene instead of an empty one
    pub demo_scene: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            base_camera_position: Vec3::new(0.0, 0.0, 1000.0),
            focal_length: 300.0,
            polygon_budget: 2000,
            environment: Environment::default(),
            screen_translation: Vec2::new(85.0, 0.0),
            demo_scene: true,
            viewport_width: 1280,
            viewport_height: 720,
        }
    }
}

impl StudioConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: StudioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if self.polygon_budget == 0 {
            return Err(ConfigError::ZeroPolygonBudget);
        }
        if !self.focal_length.is_finite() || self.focal_length <= 0.0 {
            return Err(ConfigError::InvalidFocalLength(self.focal_length));
        }
        self.environment.validate()
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width as f32, self.viewport_height as f32)
    }
}
