use glam::{Mat3, Vec3};

/// Three-axis rotation in radians, applied Y first, then X, then Z.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    /// No rotation on any axis.
    pub const IDENTITY: Rotation = Rotation {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Combined rotation matrix (Z · X · Y, so Y is applied first).
    pub fn matrix(&self) -> Mat3 {
        Mat3::from_rotation_z(self.z) * Mat3::from_rotation_x(self.x) * Mat3::from_rotation_y(self.y)
    }

    /// Rotate a point about the origin.
    #[inline]
    pub fn apply(&self, point: Vec3) -> Vec3 {
        self.matrix() * point
    }
}
