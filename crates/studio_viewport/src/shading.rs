//! Flat shading and primitive-to-command conversion.

use studio_core::{Color, Environment, Primitive, Sphere};
use studio_math::Vec3;

use crate::context::RenderContext;
use crate::draw::{DrawCommand, Rgb8};

/// Distance over which a surface's brightness halves.
const FALLOFF_DISTANCE: f32 = 100.0;
/// Background brightness for unit sky light and tint.
const SKY_FILL_LEVEL: f32 = 170.0;

fn to_rgb8(colour: Color) -> Rgb8 {
    let c = (colour * 255.0).clamp(Vec3::ZERO, Vec3::splat(255.0));
    [c.x as u8, c.y as u8, c.z as u8]
}

/// Flat colour for a primitive.
///
/// Emissive materials draw at full colour. Everything else darkens with
/// distance from the light position.
pub fn shade(primitive: &Primitive, ctx: &RenderContext) -> Rgb8 {
    let material = primitive.material();
    if material.is_emissive() {
        return to_rgb8(material.colour);
    }

    let distance = primitive.midpoint().distance(ctx.light_position());
    to_rgb8(material.colour / (1.0 + distance.abs() / FALLOFF_DISTANCE))
}

/// On-screen radius of a sphere.
pub fn sphere_screen_radius(sphere: &Sphere, ctx: &RenderContext) -> f32 {
    let centre = ctx.project(sphere.centre);
    let right = ctx.project(sphere.centre + Vec3::new(sphere.radius, 0.0, 0.0));
    let up = ctx.project(sphere.centre + Vec3::new(0.0, sphere.radius, 0.0));
    (centre.distance(right) + centre.distance(up)) / 2.0
}

/// Background colour for the sky settings.
pub fn sky_fill(environment: &Environment) -> Rgb8 {
    let fill = (environment.sky_tint * environment.sky_light * SKY_FILL_LEVEL)
        .clamp(Vec3::ZERO, Vec3::splat(255.0));
    [fill.x as u8, fill.y as u8, fill.z as u8]
}

/// Project and shade one primitive.
pub fn draw_command(primitive: &Primitive, ctx: &RenderContext) -> DrawCommand {
    let colour = shade(primitive, ctx);
    match primitive {
        Primitive::Triangle(t) => DrawCommand::Polygon {
            points: [ctx.project(t.p1), ctx.project(t.p2), ctx.project(t.p3)],
            colour,
        },
        Primitive::Sphere(s) => DrawCommand::Circle {
            centre: ctx.project(s.centre),
            radius: sphere_screen_radius(s, ctx),
            colour,
        },
    }
}
