//! Ray-primitive intersection.
//!
//! Uses a quadratic solve for spheres and the Möller-Trumbore algorithm
//! for triangles. There is no acceleration structure: the closest-hit
//! query scans every primitive.

use studio_math::{solve_quadratic, Ray, Vec3, Vec3Ext};

use crate::{Material, Primitive, Sphere, Triangle};

/// Tolerance for triangle tests, machine epsilon.
const EPSILON: f32 = f32::EPSILON;

/// Record of a ray-primitive intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitInfo {
    /// Distance along the ray to the intersection
    pub distance: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection (outward for spheres, winding-dependent for triangles)
    pub normal: Vec3,
    /// Material of the primitive that was hit
    pub material: Material,
}

/// Intersect a ray with a sphere.
///
/// Takes the nearer root when both are in front of the origin, the single
/// positive root when the origin is inside the sphere, and misses when
/// the sphere is entirely behind the origin.
pub fn hit_sphere(ray: &Ray, sphere: &Sphere) -> Option<HitInfo> {
    let ray_to_centre = ray.origin - sphere.centre;
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * ray.direction.dot(ray_to_centre);
    let c = ray_to_centre.dot(ray_to_centre) - sphere.radius * sphere.radius;

    let (root1, root2) = solve_quadratic(a, b, c)?;
    if root1 < 0.0 && root2 < 0.0 {
        return None;
    }

    let distance = if root1 > 0.0 && root2 > 0.0 {
        root1.min(root2)
    } else {
        root1.max(root2)
    };

    let point = ray.at(distance);
    Some(HitInfo {
        distance,
        point,
        normal: (point - sphere.centre).normalise(),
        material: sphere.material,
    })
}

/// Möller-Trumbore ray-triangle intersection.
pub fn hit_triangle(ray: &Ray, triangle: &Triangle) -> Option<HitInfo> {
    let edge1 = triangle.p2 - triangle.p1;
    let edge2 = triangle.p3 - triangle.p1;

    let ray_cross_e2 = ray.direction.cross(edge2);
    let det = edge1.dot(ray_cross_e2);

    // Ray is parallel to triangle
    if det > -EPSILON && det < EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = ray.origin - triangle.p1;
    let u = inv_det * s.dot(ray_cross_e2);

    if (u < 0.0 && u.abs() > EPSILON) || (u > 1.0 && (u - 1.0).abs() > EPSILON) {
        return None;
    }

    let s_cross_e1 = s.cross(edge1);
    let v = inv_det * ray.direction.dot(s_cross_e1);

    if (v < 0.0 && v.abs() > EPSILON) || (u + v > 1.0 && (u + v - 1.0).abs() > EPSILON) {
        return None;
    }

    // Hit must be strictly in front of the origin
    let distance = inv_det * edge2.dot(s_cross_e1);
    if distance <= EPSILON {
        return None;
    }

    Some(HitInfo {
        distance,
        point: ray.at(distance),
        normal: edge1.cross(edge2).normalise(),
        material: triangle.material,
    })
}

/// Find the nearest intersection of `ray` with any primitive.
pub fn find_closest_hit(primitives: &[Primitive], ray: &Ray) -> Option<HitInfo> {
    let mut closest = None;
    let mut closest_so_far = f32::INFINITY;

    for primitive in primitives {
        if let Some(hit) = primitive.intersect(ray) {
            if hit.distance < closest_so_far {
                closest_so_far = hit.distance;
                closest = Some(hit);
            }
        }
    }

    closest
}
