//! Progressive accumulation and 8-bit output.

use image::RgbImage;
use studio_core::Color;

use crate::RenderError;

/// Running per-pixel sums of path-traced samples.
///
/// One sample per pixel is added per pass; the displayed value is the sum
/// divided by the number of passes. The buffer lives for one render
/// session and only `reset` clears it.
#[derive(Debug, Clone)]
pub struct AccumulationBuffer {
    width: u32,
    height: u32,
    sums: Vec<[f32; 3]>,
    frames: u32,
}

impl AccumulationBuffer {
    /// Create an empty buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            sums: vec![[0.0; 3]; width as usize * height as usize],
            frames: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of complete passes accumulated.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Add one full pass of samples in row-major order.
    pub fn add_pass(&mut self, samples: &[Color]) -> Result<(), RenderError> {
        if samples.len() != self.sums.len() {
            return Err(RenderError::SampleCountMismatch {
                expected: self.sums.len(),
                actual: samples.len(),
            });
        }

        for (sum, sample) in self.sums.iter_mut().zip(samples) {
            sum[0] += sample.x;
            sum[1] += sample.y;
            sum[2] += sample.z;
        }
        self.frames += 1;
        Ok(())
    }

    /// Averaged colour at (x, y). Black before the first pass.
    pub fn average(&self, x: u32, y: u32) -> Color {
        let index = (y * self.width + x) as usize;
        self.average_at(index)
    }

    fn average_at(&self, index: usize) -> Color {
        if self.frames == 0 {
            return Color::ZERO;
        }
        Color::from_array(self.sums[index]) / self.frames as f32
    }

    /// Clear all sums and restart the frame count.
    pub fn reset(&mut self) {
        self.sums.fill([0.0; 3]);
        self.frames = 0;
    }

    /// Convert the running average to clamped 8-bit RGB.
    pub fn to_pixels(&self) -> PixelBuffer {
        let pixels = (0..self.sums.len())
            .map(|index| color_to_rgb8(self.average_at(index)))
            .collect();

        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

/// Convert a linear colour in [0, 1] to 8-bit RGB, rounding and clamping.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let scaled = (color * 255.0).round().clamp(Color::ZERO, Color::splat(255.0));
    [scaled.x as u8, scaled.y as u8, scaled.z as u8]
}

/// Finished 8-bit image, width × height × 3 channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl PixelBuffer {
    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Flat RGB bytes in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy into an `image` buffer for display or saving.
    pub fn to_image(&self) -> Option<RgbImage> {
        RgbImage::from_raw(self.width, self.height, self.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_over_passes() {
        let mut buffer = AccumulationBuffer::new(2, 1);
        buffer.add_pass(&[Color::new(1.0, 0.0, 0.5), Color::ZERO]).unwrap();
        buffer.add_pass(&[Color::new(0.0, 0.0, 0.5), Color::ONE]).unwrap();

        assert_eq!(buffer.frames(), 2);
        assert_eq!(buffer.average(0, 0), Color::new(0.5, 0.0, 0.5));
        assert_eq!(buffer.average(1, 0), Color::splat(0.5));
    }

    #[test]
    fn test_empty_buffer_is_black() {
        let buffer = AccumulationBuffer::new(3, 2);
        assert_eq!(buffer.frames(), 0);
        assert!(buffer.to_pixels().pixels.iter().all(|p| *p == [0, 0, 0]));
    }

    #[test]
    fn test_sample_count_mismatch() {
        let mut buffer = AccumulationBuffer::new(2, 2);
        let err = buffer.add_pass(&[Color::ONE]).unwrap_err();
        assert!(matches!(err, RenderError::SampleCountMismatch { expected: 4, actual: 1 }));
        assert_eq!(buffer.frames(), 0);
    }

    #[test]
    fn test_reset() {
        let mut buffer = AccumulationBuffer::new(1, 1);
        buffer.add_pass(&[Color::ONE]).unwrap();
        buffer.reset();
        assert_eq!(buffer.frames(), 0);
        assert_eq!(buffer.average(0, 0), Color::ZERO);
    }

    #[test]
    fn test_color_to_rgb8_clamps_and_rounds() {
        assert_eq!(color_to_rgb8(Color::new(0.5, 2.0, -1.0)), [128, 255, 0]);
        assert_eq!(color_to_rgb8(Color::new(0.1, 1.0, 0.0)), [26, 255, 0]);
    }

    #[test]
    fn test_pixel_buffer_bytes_and_image() {
        let mut buffer = AccumulationBuffer::new(2, 1);
        buffer.add_pass(&[Color::new(1.0, 0.0, 0.0), Color::new(0.0, 0.0, 1.0)]).unwrap();

        let pixels = buffer.to_pixels();
        assert_eq!(pixels.as_bytes(), &[255u8, 0, 0, 0, 0, 255]);
        assert_eq!(pixels.get(1, 0), [0, 0, 255]);

        let image = pixels.to_image().unwrap();
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0]);
    }
}
