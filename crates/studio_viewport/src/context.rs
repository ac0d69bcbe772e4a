//! Per-frame projection state.

use studio_math::{Mat3, Vec2, Vec3};

/// Fixed depth offset applied after rotation.
const DEPTH_OFFSET: f32 = 200.0;
/// Depths closer to zero than this are replaced with `DEPTH_FALLBACK`.
const DEPTH_EPSILON: f32 = 1e-9;
const DEPTH_FALLBACK: f32 = 0.0001;
/// Lighting anchor sits at the camera position scaled down by this factor.
const LIGHT_SCALE: f32 = 10.0;

/// Everything needed to project and shade one frame.
///
/// Built once per frame from the camera and handed to the projection and
/// shading functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    pub camera_position: Vec3,
    pub rotation: Mat3,
    pub focal_length: f32,
    pub viewport: Vec2,
    pub screen_translation: Vec2,
}

impl RenderContext {
    pub fn new(
        camera_position: Vec3,
        rotation: Mat3,
        focal_length: f32,
        viewport: Vec2,
        screen_translation: Vec2,
    ) -> Self {
        Self {
            camera_position,
            rotation,
            focal_length,
            viewport,
            screen_translation,
        }
    }

    /// Project a world-space point to screen pixels.
    ///
    /// Uses the same Y, X, Z rotation order as the camera position so the
    /// projected view and the depth ordering agree. No clipping is done;
    /// points behind the eye project mirrored.
    pub fn project(&self, point: Vec3) -> Vec2 {
        let mut p = self.rotation * point;
        p.z -= DEPTH_OFFSET;
        if p.z.abs() < DEPTH_EPSILON {
            p.z = DEPTH_FALLBACK;
        }

        let f = self.focal_length;
        let half = self.viewport / 2.0;
        Vec2::new(-(f * p.x / p.z) + half.x, -(f * p.y / p.z) + half.y) + self.screen_translation
    }

    /// Point that distance shading is measured from.
    pub fn light_position(&self) -> Vec3 {
        self.camera_position / LIGHT_SCALE
    }
}
