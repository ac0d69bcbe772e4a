//! Core path tracing.
//!
//! Each path gathers light iteratively: every surface hit tints the
//! running throughput by the surface colour and adds its emission, then
//! bounces in a direction blended between a mirror reflection and a
//! random diffuse scatter by the material's shine. Escaping to the sky
//! always ends the path.
//!
//! The bounce model is deliberately simple and not energy conserving;
//! it defines the look of the renderer.

use rand::RngCore;
use studio_core::{find_closest_hit, Color, Environment, Primitive};
use studio_math::{random_vector, Ray, Vec3, Vec3Ext};

use crate::{Camera, TraceConfig};

/// Offset along the normal for bounce origins, avoids re-hitting the same surface.
const SURFACE_OFFSET: f32 = 0.01;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * 2.0 * v.dot(n)
}

/// Sky light arriving along `direction`.
///
/// Brightest towards the horizon and below, falling off as the ray
/// points upward.
pub fn sky_colour(direction: Vec3, environment: &Environment) -> Color {
    let amount = environment.sky_light / (direction.y + 1.2).powi(2);
    environment.sky_tint * amount
}

/// Trace one path through the scene and return the gathered light.
pub fn trace_path(
    primitives: &[Primitive],
    mut ray: Ray,
    environment: &Environment,
    max_bounces: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut throughput = Color::ONE;
    let mut light = Color::ZERO;
    let mut cosine = 1.0;

    for _ in 0..max_bounces {
        let Some(hit) = find_closest_hit(primitives, &ray) else {
            light += throughput * sky_colour(ray.direction, environment) * cosine;
            break;
        };

        let material = hit.material;
        throughput *= material.colour;
        light += throughput * material.emission;

        ray.origin = hit.point + hit.normal * SURFACE_OFFSET;

        let specular = reflect(ray.direction, hit.normal).normalise();
        let diffuse = (random_vector(rng) + hit.normal).normalise();
        let bounce = (specular * material.shine + diffuse * (1.0 - material.shine)) / 2.0;

        ray.direction = bounce.normalise();
        cosine = hit.normal.dot(ray.direction).max(0.0) * 2.0;
    }

    light
}

/// Trace one jittered sample for pixel (x, y), scaled by the configured brightness.
pub fn render_pixel(
    primitives: &[Primitive],
    camera: &Camera,
    x: u32,
    y: u32,
    environment: &Environment,
    config: &TraceConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let ray = camera.get_ray(x, y, rng);
    trace_path(primitives, ray, environment, config.max_bounces, rng) * config.brightness
}
