//! Path tracer scene space.
//!
//! The editor lays scenes out in screen-sized units with +Y pointing down
//! the screen. The tracer's camera sits at the origin looking down -Z, so
//! editor primitives are scaled down, flipped vertically and pushed in
//! front of the camera, and a large ground sphere is added underneath.

use log::info;
use studio_core::{Material, Primitive, Scene, Sphere, Triangle};
use studio_math::Vec3;

/// Editor units per tracer unit.
const COORD_RATIO: f32 = 0.25;
/// Depth shift applied after scaling.
const Z_OFFSET: f32 = -50.0;

const GROUND_CENTRE: Vec3 = Vec3::new(0.0, -10000.0, -5.0);
const GROUND_RADIUS: f32 = 9995.0;

/// Primitives in the tracer's coordinate frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceScene {
    primitives: Vec<Primitive>,
}

impl TraceScene {
    /// Use primitives as-is, already in tracer space.
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    /// Convert an editor scene and add the ground sphere.
    pub fn from_editor_scene(scene: &Scene) -> Self {
        let mut primitives: Vec<Primitive> = scene.iter().map(to_trace_space).collect();
        primitives.push(Primitive::Sphere(ground()));

        info!(
            "Converted editor scene: {} primitives (+ ground)",
            primitives.len() - 1
        );
        Self { primitives }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Grey, half-shiny ground sphere whose top sits at y = -5.
pub fn ground() -> Sphere {
    Sphere::new(
        GROUND_CENTRE,
        GROUND_RADIUS,
        Material::new(Vec3::splat(100.0) / 255.0, 0.5, 0.0),
    )
}

fn to_trace_point(p: Vec3) -> Vec3 {
    Vec3::new(p.x * COORD_RATIO, -p.y * COORD_RATIO, p.z * COORD_RATIO + Z_OFFSET)
}

fn to_trace_space(primitive: &Primitive) -> Primitive {
    match primitive {
        Primitive::Sphere(s) => Primitive::Sphere(Sphere::new(
            to_trace_point(s.centre),
            s.radius * COORD_RATIO,
            s.material,
        )),
        Primitive::Triangle(t) => Primitive::Triangle(Triangle::new(
            to_trace_point(t.p1),
            to_trace_point(t.p2),
            to_trace_point(t.p3),
            t.material,
        )),
    }
}
