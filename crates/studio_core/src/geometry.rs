//! Sphere and triangle primitives.
//!
//! Primitives are plain immutable values; editing a scene replaces them
//! rather than mutating in place.

use studio_math::{Ray, Vec3, Vec3Ext};

use crate::hit::{hit_sphere, hit_triangle, HitInfo};
use crate::Material;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub centre: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(centre: Vec3, radius: f32, material: Material) -> Self {
        Self {
            centre,
            radius,
            material,
        }
    }
}

/// A triangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
    pub material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3, material: Material) -> Self {
        Self {
            p1,
            p2,
            p3,
            material,
        }
    }

    /// Average of the three vertices.
    pub fn centroid(&self) -> Vec3 {
        (self.p1 + self.p2 + self.p3) / 3.0
    }

    /// Geometric face normal, `(p2 - p1) × (p3 - p1)` normalised.
    ///
    /// Flips with winding. Degenerate triangles give the zero vector.
    pub fn normal(&self) -> Vec3 {
        (self.p2 - self.p1).cross(self.p3 - self.p1).normalise()
    }
}

/// A renderable primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Primitive {
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => &sphere.material,
            Primitive::Triangle(triangle) => &triangle.material,
        }
    }

    /// Representative point: sphere centre or triangle centroid.
    pub fn midpoint(&self) -> Vec3 {
        match self {
            Primitive::Sphere(sphere) => sphere.centre,
            Primitive::Triangle(triangle) => triangle.centroid(),
        }
    }

    /// Distance from `point` to the primitive's midpoint.
    ///
    /// Used for depth ordering, not for exact surface distance.
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.midpoint().distance(point)
    }

    /// Intersect a ray with this primitive.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<HitInfo> {
        match self {
            Primitive::Sphere(sphere) => hit_sphere(ray, sphere),
            Primitive::Triangle(triangle) => hit_triangle(ray, triangle),
        }
    }

    pub fn is_triangle(&self) -> bool {
        matches!(self, Primitive::Triangle(_))
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

/// Split a quadrilateral into two triangles, `[p1, p2, p3]` and `[p1, p3, p4]`.
pub fn quad(p1: Vec3, p2: Vec3, p3: Vec3, p4: Vec3, material: Material) -> [Triangle; 2] {
    [
        Triangle::new(p1, p2, p3, material),
        Triangle::new(p1, p3, p4, material),
    ]
}

/// Axis-aligned cube built from six quads (twelve triangles).
///
/// Faces keep the material colour as given. No distance shading is baked
/// in; the preview shades per frame, so cubes draw brighter than they
/// would with a pre-darkened colour.
pub fn cube(side_length: f32, centre: Vec3, material: Material) -> Vec<Triangle> {
    let r = side_length / 2.0;
    let corner = |x: f32, y: f32, z: f32| centre + Vec3::new(x * r, y * r, z * r);

    let faces = [
        // front
        [corner(-1.0, 1.0, -1.0), corner(1.0, 1.0, -1.0), corner(1.0, -1.0, -1.0), corner(-1.0, -1.0, -1.0)],
        // left
        [corner(-1.0, 1.0, -1.0), corner(-1.0, 1.0, 1.0), corner(-1.0, -1.0, 1.0), corner(-1.0, -1.0, -1.0)],
        // back
        [corner(-1.0, 1.0, 1.0), corner(1.0, 1.0, 1.0), corner(1.0, -1.0, 1.0), corner(-1.0, -1.0, 1.0)],
        // right
        [corner(1.0, 1.0, 1.0), corner(1.0, 1.0, -1.0), corner(1.0, -1.0, -1.0), corner(1.0, -1.0, 1.0)],
        // top
        [corner(-1.0, 1.0, -1.0), corner(1.0, 1.0, -1.0), corner(1.0, 1.0, 1.0), corner(-1.0, 1.0, 1.0)],
        // bottom
        [corner(-1.0, -1.0, -1.0), corner(1.0, -1.0, -1.0), corner(1.0, -1.0, 1.0), corner(-1.0, -1.0, 1.0)],
    ];

    faces
        .iter()
        .flat_map(|[a, b, c, d]| quad(*a, *b, *c, *d, material))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_centroid() {
        let tri = Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 3.0),
            Material::default(),
        );
        assert_eq!(tri.centroid(), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_normal_follows_winding() {
        let m = Material::default();
        let ccw = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y, m);
        let cw = Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::X, m);
        assert_eq!(ccw.normal(), Vec3::Z);
        assert_eq!(cw.normal(), -Vec3::Z);
    }

    #[test]
    fn test_distance_to_uses_midpoint() {
        let sphere: Primitive = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 4.0, Material::default()).into();
        assert_eq!(sphere.distance_to(Vec3::ZERO), 10.0);
    }

    #[test]
    fn test_quad_split() {
        let m = Material::default();
        let [a, b] = quad(Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y, m);
        assert_eq!((a.p1, a.p2, a.p3), (Vec3::ZERO, Vec3::X, Vec3::ONE));
        assert_eq!((b.p1, b.p2, b.p3), (Vec3::ZERO, Vec3::ONE, Vec3::Y));
    }

    #[test]
    fn test_cube() {
        let tris = cube(10.0, Vec3::new(0.0, 0.0, 100.0), Material::default());
        assert_eq!(tris.len(), 12);

        for tri in &tris {
            for p in [tri.p1, tri.p2, tri.p3] {
                assert_eq!(p.x.abs(), 5.0);
                assert_eq!(p.y.abs(), 5.0);
                assert!(p.z == 95.0 || p.z == 105.0);
            }
        }
    }

    #[test]
    fn test_cube_keeps_material_colour() {
        let cyan = Material::from_rgb8([0, 255, 255], 0.0, 0.0);
        let far = cube(10.0, Vec3::new(0.0, 0.0, -5000.0), cyan);
        assert!(far.iter().all(|t| t.material == cyan));
    }
}
