//! Adaptive level of detail.
//!
//! Positive levels split each triangle into four at its edge midpoints.
//! Negative levels merge consecutive groups of four triangles back into
//! one. Spheres are never changed.

use log::debug;
use studio_core::{Primitive, Sphere, Triangle};

/// Split a triangle into four at its edge midpoints.
pub fn subdivide(triangle: &Triangle) -> [Triangle; 4] {
    let Triangle { p1, p2, p3, material } = *triangle;
    let m12 = (p1 + p2) * 0.5;
    let m13 = (p1 + p3) * 0.5;
    let m23 = (p2 + p3) * 0.5;

    [
        Triangle::new(p1, m12, m13, material),
        Triangle::new(m12, p2, m23, material),
        Triangle::new(m13, m23, p3, material),
        Triangle::new(m12, m23, m13, material),
    ]
}

/// Merge four triangles into one spanning their outer corners.
///
/// Inverse of [`subdivide`]; the result takes the fourth triangle's material.
pub fn group(quad: &[Triangle; 4]) -> Triangle {
    Triangle::new(quad[0].p1, quad[1].p2, quad[2].p3, quad[3].material)
}

/// Apply `level` steps of subdivision (positive) or grouping (negative).
///
/// Triangles come first in the output, followed by the spheres in their
/// original order.
pub fn apply_detail(primitives: &[Primitive], level: i32) -> Vec<Primitive> {
    let mut triangles = Vec::new();
    let mut spheres: Vec<Sphere> = Vec::new();
    for primitive in primitives {
        match primitive {
            Primitive::Triangle(t) => triangles.push(*t),
            Primitive::Sphere(s) => spheres.push(*s),
        }
    }

    for _ in 0..level.unsigned_abs() {
        if triangles.is_empty() {
            break;
        }
        triangles = if level > 0 {
            triangles.iter().flat_map(subdivide).collect()
        } else {
            // A trailing chunk of fewer than four is dropped
            triangles
                .chunks_exact(4)
                .map(|chunk| group(&[chunk[0], chunk[1], chunk[2], chunk[3]]))
                .collect()
        };
    }

    let mut out = Vec::with_capacity(triangles.len() + spheres.len());
    out.extend(triangles.into_iter().map(Primitive::Triangle));
    out.extend(spheres.into_iter().map(Primitive::Sphere));
    out
}

/// Feedback controller that steers the detail level toward a primitive budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LodController {
    amount: i32,
    last_count: usize,
    budget: usize,
}

impl LodController {
    pub fn new(budget: usize) -> Self {
        Self {
            amount: 0,
            last_count: 0,
            budget,
        }
    }

    /// Current detail level. Negative values mean grouping.
    pub fn amount(&self) -> i32 {
        self.amount
    }

    /// Primitive count of the most recent frame.
    pub fn last_count(&self) -> usize {
        self.last_count
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Transform `primitives` at the current level and adjust the level
    /// for the next frame.
    ///
    /// A positive level is first capped to the deepest subdivision whose
    /// triangle count still fits the budget, so newly added triangles can
    /// never be expanded past it in a single frame.
    pub fn apply(&mut self, primitives: &[Primitive]) -> Vec<Primitive> {
        let triangles = primitives.iter().filter(|p| p.is_triangle()).count();
        let cap = max_subdivision_level(triangles, self.budget);
        if self.amount > cap {
            debug!("Detail level {} capped to {} for {} triangles", self.amount, cap, triangles);
            self.amount = cap;
        }

        let transformed = apply_detail(primitives, self.amount);
        // Triangles are emitted ahead of spheres
        let drawn = transformed.iter().take_while(|p| p.is_triangle()).count();
        self.record(transformed.len(), drawn);
        transformed
    }

    /// Adjust the level from this frame's primitive count and the number
    /// of triangles among them.
    ///
    /// Detail only rises when a full subdivision step (4x) still fits the
    /// budget, and the previous frame was within budget. Without triangles
    /// the level can only climb back toward zero, and it never falls, since
    /// neither direction would change what is drawn.
    pub fn record(&mut self, count: usize, triangles: usize) {
        let previous = self.amount;

        if count.saturating_mul(4) <= self.budget
            && self.last_count <= self.budget
            && (triangles > 0 || self.amount < 0)
        {
            self.amount += 1;
        }
        if count > self.budget && triangles > 0 {
            self.amount -= 1;
        }
        self.last_count = count;

        if self.amount != previous {
            debug!(
                "Detail level {} -> {} ({} primitives, budget {})",
                previous, self.amount, count, self.budget
            );
        }
    }
}

/// Deepest subdivision level at which `triangles` stays within `budget`.
fn max_subdivision_level(triangles: usize, budget: usize) -> i32 {
    if triangles == 0 {
        return 0;
    }
    let mut level = 0;
    let mut count = triangles;
    while count.saturating_mul(4) <= budget {
        count *= 4;
        level += 1;
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::Material;
    use studio_math::Vec3;

    fn tri(offset: f32, material: Material) -> Triangle {
        Triangle::new(
            Vec3::new(offset, 0.0, 0.0),
            Vec3::new(offset + 4.0, 0.0, 0.0),
            Vec3::new(offset, 4.0, 0.0),
            material,
        )
    }

    #[test]
    fn test_subdivide_midpoints() {
        let t = tri(0.0, Material::default());
        let [a, b, c, d] = subdivide(&t);

        assert_eq!(a.p1, t.p1);
        assert_eq!(a.p2, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(a.p3, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(b.p2, t.p2);
        assert_eq!(b.p3, Vec3::new(2.0, 2.0, 0.0));
        assert_eq!(c.p3, t.p3);
        // Centre triangle joins the three midpoints
        assert_eq!((d.p1, d.p2, d.p3), (a.p2, b.p3, a.p3));
    }

    #[test]
    fn test_group_inverts_subdivide() {
        let t = tri(3.0, Material::default());
        assert_eq!(group(&subdivide(&t)), t);
    }

    #[test]
    fn test_group_takes_fourth_material() {
        let red = Material::diffuse(Vec3::new(1.0, 0.0, 0.0));
        let blue = Material::diffuse(Vec3::new(0.0, 0.0, 1.0));
        let quad = [tri(0.0, red), tri(1.0, red), tri(2.0, red), tri(3.0, blue)];
        assert_eq!(group(&quad).material, blue);
    }

    #[test]
    fn test_apply_detail_counts() {
        let prims: Vec<Primitive> = (0..10).map(|i| tri(i as f32, Material::default()).into()).collect();

        assert_eq!(apply_detail(&prims, 0).len(), 10);
        assert_eq!(apply_detail(&prims, 1).len(), 40);
        assert_eq!(apply_detail(&prims, 2).len(), 160);
        // 10 / 4 = 2 with two left over
        assert_eq!(apply_detail(&prims, -1).len(), 2);
        assert_eq!(apply_detail(&prims, -2).len(), 0);
    }

    #[test]
    fn test_spheres_pass_through_after_triangles() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Material::default());
        let prims = vec![
            Primitive::Sphere(sphere),
            tri(0.0, Material::default()).into(),
        ];

        let out = apply_detail(&prims, 1);
        assert_eq!(out.len(), 5);
        assert!(out[..4].iter().all(Primitive::is_triangle));
        assert_eq!(out[4], Primitive::Sphere(sphere));

        let out = apply_detail(&prims, -3);
        assert_eq!(out, vec![Primitive::Sphere(sphere)]);
    }

    #[test]
    fn test_controller_rises_while_step_fits() {
        let mut lod = LodController::new(100);
        lod.record(25, 25);
        assert_eq!(lod.amount(), 1);
        lod.record(26, 26);
        assert_eq!(lod.amount(), 1);
    }

    #[test]
    fn test_controller_drops_over_budget() {
        let mut lod = LodController::new(100);
        lod.record(101, 101);
        assert_eq!(lod.amount(), -1);
        assert_eq!(lod.last_count(), 101);

        // Last frame was over budget, so a small count does not raise detail yet
        lod.record(10, 10);
        assert_eq!(lod.amount(), -1);
        lod.record(10, 10);
        assert_eq!(lod.amount(), 0);
    }

    #[test]
    fn test_controller_settles() {
        let prims: Vec<Primitive> = (0..3).map(|i| tri(i as f32, Material::default()).into()).collect();
        let mut lod = LodController::new(200);

        // 3 -> 12 -> 48 -> 192, where a further step would exceed the budget
        for _ in 0..10 {
            lod.apply(&prims);
        }
        assert_eq!(lod.amount(), 3);
        assert_eq!(lod.last_count(), 192);
    }

    #[test]
    fn test_level_holds_without_triangles() {
        let mut lod = LodController::new(100);
        for _ in 0..10 {
            lod.record(3, 0);
        }
        assert_eq!(lod.amount(), 0);

        // Spheres alone over budget: grouping cannot help
        for _ in 0..10 {
            lod.record(500, 0);
        }
        assert_eq!(lod.amount(), 0);
    }

    #[test]
    fn test_grouped_away_triangles_climb_back() {
        let mut lod = LodController::new(100);
        lod.record(10, 10);
        lod.record(200, 200);
        lod.record(200, 200);
        assert_eq!(lod.amount(), -1);

        // Everything grouped away, but the level is below zero
        lod.record(1, 0);
        assert_eq!(lod.amount(), -1);
        lod.record(1, 0);
        assert_eq!(lod.amount(), 0);
        lod.record(1, 0);
        assert_eq!(lod.amount(), 0);
    }

    #[test]
    fn test_max_subdivision_level() {
        assert_eq!(max_subdivision_level(0, 2000), 0);
        assert_eq!(max_subdivision_level(1, 2000), 5);
        assert_eq!(max_subdivision_level(3, 200), 3);
        assert_eq!(max_subdivision_level(500, 2000), 1);
        assert_eq!(max_subdivision_level(3000, 2000), 0);
    }

    #[test]
    fn test_new_triangle_is_capped() {
        let sphere: Primitive = Sphere::new(Vec3::ZERO, 1.0, Material::default()).into();
        let mut lod = LodController::new(2000);
        for _ in 0..10 {
            lod.apply(&[sphere]);
        }
        assert_eq!(lod.amount(), 0);

        // Force a deep level, as a previously sparse mesh would have reached
        lod.amount = 12;
        let out = lod.apply(&[tri(0.0, Material::default()).into(), sphere]);
        assert_eq!(out.len(), 1025);
        assert!(lod.amount() <= 5);
    }
}
