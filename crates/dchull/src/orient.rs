//! Orientation of ordered point triples.
//!
//! - `signed_area2`: twice the signed triangle area, `(a − c) × (b − c)`.
//! - `turn` / `turn_eps`: classify the triple as left turn, right turn, or collinear.
//! - `lies_between`: collinear betweenness, used by the bridge walks to step past
//!   points sitting on a seam edge.

use nalgebra::Vector2;

/// Classification of the ordered triple `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// `c` is reached by a counter-clockwise turn from `a → b`.
    Left,
    /// `c` is reached by a clockwise turn from `a → b`.
    Right,
    Collinear,
}

impl Turn {
    /// Classification of the reversed triple `(c, b, a)`.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Turn::Left => Turn::Right,
            Turn::Right => Turn::Left,
            Turn::Collinear => Turn::Collinear,
        }
    }
}

/// Twice the signed area of the triangle `(a, b, c)`.
/// Positive for counter-clockwise, negative for clockwise ordering.
#[inline]
pub fn signed_area2(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (a.x - c.x) * (b.y - c.y) - (b.x - c.x) * (a.y - c.y)
}

/// Exact orientation: only a determinant of exactly zero is collinear.
#[inline]
pub fn turn(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Turn {
    turn_eps(a, b, c, 0.0)
}

/// Orientation with a collinearity band: `|det| <= eps` is collinear.
///
/// A NaN determinant also lands in `Collinear`, so callers never advance on it.
#[inline]
pub fn turn_eps(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> Turn {
    let det = signed_area2(a, b, c);
    if det > eps {
        Turn::Left
    } else if det < -eps {
        Turn::Right
    } else {
        Turn::Collinear
    }
}

/// For collinear `a, b, c`: is `b` strictly inside the segment `a c`?
///
/// Coincident points are never strictly between.
#[inline]
pub fn lies_between(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    (a - b).dot(&(c - b)) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn turn_basic_cases() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert_eq!(turn(a, b, vector![1.0, 1.0]), Turn::Left);
        assert_eq!(turn(a, b, vector![1.0, -1.0]), Turn::Right);
        assert_eq!(turn(a, b, vector![5.0, 0.0]), Turn::Collinear);
        // Up to the apex and back down: a clockwise bend.
        assert_eq!(
            turn(vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 0.0]),
            Turn::Right
        );
    }

    #[test]
    fn signed_area_matches_triangle_area() {
        let det = signed_area2(vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 3.0]);
        assert!((det - 6.0).abs() < 1e-12);
    }

    #[test]
    fn eps_band_absorbs_small_determinants() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        let c = vector![2.0, 1e-10];
        assert_eq!(turn(a, b, c), Turn::Left);
        assert_eq!(turn_eps(a, b, c, 1e-9), Turn::Collinear);
    }

    #[test]
    fn nan_is_collinear() {
        let a = vector![f64::NAN, 0.0];
        assert_eq!(turn(a, vector![1.0, 0.0], vector![0.0, 1.0]), Turn::Collinear);
    }

    #[test]
    fn between_on_a_line() {
        let a = vector![0.0, 0.0];
        let c = vector![2.0, 2.0];
        assert!(lies_between(a, vector![1.0, 1.0], c));
        assert!(!lies_between(a, vector![3.0, 3.0], c));
        assert!(!lies_between(a, a, c));
    }

    #[test]
    fn reversal_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            let mut p = || vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
            let (a, b, c) = (p(), p(), p());
            assert_eq!(turn(c, b, a), turn(a, b, c).reversed());
        }
    }

    proptest! {
        #[test]
        fn reversing_swaps_left_and_right(
            ax in -1e3..1e3f64, ay in -1e3..1e3f64,
            bx in -1e3..1e3f64, by in -1e3..1e3f64,
            cx in -1e3..1e3f64, cy in -1e3..1e3f64,
        ) {
            let (a, b, c) = (vector![ax, ay], vector![bx, by], vector![cx, cy]);
            prop_assert_eq!(turn(c, b, a), turn(a, b, c).reversed());
        }

        #[test]
        fn integer_collinear_triples_are_exact(
            x0 in -1000i32..1000, y0 in -1000i32..1000,
            dx in -50i32..50, dy in -50i32..50,
            s in 1i32..20, t in 1i32..20,
        ) {
            let p = |k: i32| vector![f64::from(x0 + k * dx), f64::from(y0 + k * dy)];
            prop_assert_eq!(turn(p(0), p(s), p(s + t)), Turn::Collinear);
        }
    }
}
