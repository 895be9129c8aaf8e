//! Validating entry points on top of the unchecked builder.
//!
//! - `try_build_hull`: same contract as `build_hull`, but checked.
//! - `convex_hull`: accepts points in any order and reports the hull as indices
//!   into the caller's slice.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

use super::build::build_hull_with;
use super::observe::NoObserver;
use super::types::HullLinks;
use crate::cfg::HullCfg;

/// Input contract violations detected by the checked entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    TooFewPoints { len: usize },
    NonFinite { index: usize },
    Unsorted { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { len } => write!(f, "need at least 2 points, got {len}"),
            Self::NonFinite { index } => write!(f, "point {index} has a non-finite coordinate"),
            Self::Unsorted { index } => {
                write!(f, "point {index} precedes its predecessor in (x, y) order")
            }
        }
    }
}

impl std::error::Error for HullError {}

/// Lexicographic `(x, y)` order. Numeric for finite values (`-0.0 == 0.0`);
/// NaNs fall back to `total_cmp` so sorting never sees an inconsistent order.
#[inline]
pub fn cmp_xy(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    cmp_f64(a.x, b.x).then_with(|| cmp_f64(a.y, b.y))
}

#[inline]
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Sort in place into the builder's input order.
pub fn sort_points(points: &mut [Vector2<f64>]) {
    points.sort_by(cmp_xy);
}

/// Permutation that sorts `points`: `points[order[k]]` is the k-th smallest.
pub fn sorted_order(points: &[Vector2<f64>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| cmp_xy(&points[i], &points[j]));
    order
}

fn check_finite(points: &[Vector2<f64>]) -> Result<(), HullError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(HullError::NonFinite { index }),
        None => Ok(()),
    }
}

/// Verify the builder's input contract: at least two finite points in order.
pub fn validate_input(points: &[Vector2<f64>]) -> Result<(), HullError> {
    if points.len() < 2 {
        return Err(HullError::TooFewPoints { len: points.len() });
    }
    check_finite(points)?;
    match points
        .windows(2)
        .position(|w| cmp_xy(&w[0], &w[1]) == Ordering::Greater)
    {
        Some(k) => Err(HullError::Unsorted { index: k + 1 }),
        None => Ok(()),
    }
}

/// Checked [`build_hull_with`](super::build_hull_with) without an observer.
pub fn try_build_hull(points: &[Vector2<f64>], cfg: HullCfg) -> Result<HullLinks, HullError> {
    validate_input(points)?;
    Ok(build_hull_with(points, cfg, &mut NoObserver))
}

/// Hull of an unordered point set, as indices into the caller's slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hull {
    /// Clockwise from the lexicographically smallest hull point.
    pub vertices_cw: Vec<usize>,
}

impl Hull {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices_cw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices_cw.is_empty()
    }

    /// Counter-clockwise order, same starting point.
    pub fn vertices_ccw(&self) -> Vec<usize> {
        let mut out = self.vertices_cw.clone();
        if out.len() > 1 {
            out[1..].reverse();
        }
        out
    }

    /// Coordinates of the hull vertices, clockwise.
    pub fn points(&self, source: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
        self.vertices_cw.iter().map(|&i| source[i]).collect()
    }
}

/// Sort a copy of `points`, build its hull, and map the result back.
///
/// Three distinct collinear input points report the degenerate base
/// structure (all three, left to right); any other collinear input reports its
/// two extreme points. Coincident points are reported once, by their first
/// index in sorted order.
pub fn convex_hull(points: &[Vector2<f64>]) -> Result<Hull, HullError> {
    if points.len() < 2 {
        return Err(HullError::TooFewPoints { len: points.len() });
    }
    check_finite(points)?;
    let order = sorted_order(points);
    let sorted: Vec<Vector2<f64>> = order.iter().map(|&i| points[i]).collect();
    let links = build_hull_with(&sorted, HullCfg::default(), &mut NoObserver);
    let vertices_cw = links
        .start()
        .map(|s| links.cycle_cw(s))
        .unwrap_or_default()
        .into_iter()
        .map(|p| order[p.0])
        .collect();
    Ok(Hull { vertices_cw })
}
