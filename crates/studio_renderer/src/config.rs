//! Path tracer settings.

use serde::{Deserialize, Serialize};
use studio_core::ConfigError;

/// Render configuration for a path tracing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Maximum surface bounces per path
    pub max_bounces: u32,
    /// Camera-plane jitter for anti-aliasing
    pub jitter: f32,
    /// Final scale applied to gathered light
    pub brightness: f32,
    /// Worker threads, 0 uses one per hardware thread
    pub threads: usize,
    /// Session seed; the same seed replays the same samples
    pub seed: u64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            max_bounces: 5,
            jitter: 0.002,
            brightness: 1.5,
            threads: 0,
            seed: 0,
        }
    }
}

impl TraceConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TraceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Number of pixels in one pass.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TraceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pixel_count(), 640 * 360);
        assert_eq!(config.max_bounces, 5);
    }

    #[test]
    fn test_from_json() {
        let config = TraceConfig::from_json_str(r#"{ "width": 32, "height": 16, "seed": 9 }"#).unwrap();
        assert_eq!(config, TraceConfig::default().with_resolution(32, 16).with_seed(9));
    }

    #[test]
    fn test_zero_resolution() {
        assert!(matches!(
            TraceConfig::from_json_str(r#"{ "height": 0 }"#),
            Err(ConfigError::InvalidDimensions { width: 640, height: 0 })
        ));
    }
}
