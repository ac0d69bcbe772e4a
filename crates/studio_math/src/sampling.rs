use glam::Vec3;
use rand::{Rng, RngCore};

/// Random vector with each component uniform in [-1, 1).
///
/// Not normalised and not uniform over directions; callers rely on
/// the cube distribution.
pub fn random_vector(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(
        rng.gen::<f32>() * 2.0 - 1.0,
        rng.gen::<f32>() * 2.0 - 1.0,
        rng.gen::<f32>() * 2.0 - 1.0,
    )
}

/// Real roots of `a·t² + b·t + c = 0`.
///
/// Returns `(-b + √d) / 2a` first, then `(-b - √d) / 2a`, or `None` when
/// the discriminant is negative.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    Some(((-b + sqrtd) / (2.0 * a), (-b - sqrtd) / (2.0 * a)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_vector_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_vector(&mut rng);
            for c in v.to_array() {
                assert!((-1.0..1.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_random_vector_seeded() {
        let a = random_vector(&mut StdRng::seed_from_u64(3));
        let b = random_vector(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_solve_quadratic_two_roots() {
        // (t - 2)(t - 3)
        let (r1, r2) = solve_quadratic(1.0, -5.0, 6.0).unwrap();
        assert_eq!(r1, 3.0);
        assert_eq!(r2, 2.0);
    }

    #[test]
    fn test_solve_quadratic_double_root() {
        let (r1, r2) = solve_quadratic(1.0, -4.0, 4.0).unwrap();
        assert_eq!(r1, 2.0);
        assert_eq!(r2, 2.0);
    }

    #[test]
    fn test_solve_quadratic_no_roots() {
        assert!(solve_quadratic(1.0, 0.0, 1.0).is_none());
    }
}
