//! Pointer-driven preview camera.

use studio_math::{Rotation, Vec2, Vec3};

/// Pointer offset (pixels from viewport centre) per rotation unit.
const POINTER_SCALE: f32 = 10.0;
/// Scaled pointer offset per radian.
const ROTATION_SCALE: f32 = 50.0;
/// Focal length change per scroll step.
const ZOOM_STEP: f32 = 20.0;
/// Focal length floor; keeps the projection from flipping sign.
pub const MIN_FOCAL_LENGTH: f32 = 4.0;

/// Camera state for the real-time preview.
///
/// Rotation follows the pointer every frame. While the rotation lock is
/// on, the view shows the scene as if the pointer were centred; it does
/// not hold the last angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCamera {
    /// Camera position before rotation
    pub base_position: Vec3,
    /// Rotation from the most recent update
    pub rotation: Rotation,
    pub focal_length: f32,
    pub rotation_locked: bool,
    position: Vec3,
}

impl ViewCamera {
    pub fn new(base_position: Vec3, focal_length: f32) -> Self {
        let mut camera = Self {
            base_position,
            rotation: Rotation::IDENTITY,
            focal_length: focal_length.max(MIN_FOCAL_LENGTH),
            rotation_locked: false,
            position: Vec3::ZERO,
        };
        camera.position = camera.rotated_position();
        camera
    }

    /// World-space camera position used for depth ordering and shading.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Recompute rotation and position from the pointer.
    pub fn update(&mut self, pointer: Vec2, viewport: Vec2) {
        let offset = (pointer - viewport / 2.0) / POINTER_SCALE;

        self.rotation = if self.rotation_locked {
            Rotation::IDENTITY
        } else {
            Rotation::new(-offset.y / ROTATION_SCALE, offset.x / ROTATION_SCALE, 0.0)
        };
        self.position = self.rotated_position();
    }

    /// Adjust focal length by a scroll delta, clamped at the floor.
    pub fn zoom(&mut self, scroll: f32) {
        self.focal_length = (self.focal_length + scroll * ZOOM_STEP).max(MIN_FOCAL_LENGTH);
    }

    pub fn toggle_rotation_lock(&mut self) {
        self.rotation_locked = !self.rotation_locked;
    }

    fn rotated_position(&self) -> Vec3 {
        let rotated = self.rotation.apply(self.base_position);
        // Screen space has X and Y mirrored
        Vec3::new(-rotated.x, -rotated.y, rotated.z)
    }
}
