//! Andrew's monotone chain, kept as an independent oracle for the
//! divide-and-conquer builder.

use nalgebra::Vector2;

use crate::hull::{cmp_xy, sorted_order};
use crate::orient::signed_area2;

/// Strict convex hull of `points` as indices, counter-clockwise from the
/// lexicographically smallest point.
///
/// Collinear boundary points are dropped and coincident points coalesced
/// (the first index in sorted order wins). All-collinear input yields its two
/// extreme points; a single distinct point yields one index.
pub fn monotone_chain(points: &[Vector2<f64>]) -> Vec<usize> {
    let mut order = sorted_order(points);
    order.dedup_by(|b, a| cmp_xy(&points[*a], &points[*b]).is_eq());
    if order.len() < 3 {
        return order;
    }
    let cross = |stack: &[usize], k: usize| {
        let n = stack.len();
        signed_area2(points[stack[n - 2]], points[stack[n - 1]], points[k])
    };
    let mut lower: Vec<usize> = Vec::with_capacity(order.len());
    for &k in &order {
        while lower.len() >= 2 && cross(&lower, k) <= 0.0 {
            lower.pop();
        }
        lower.push(k);
    }
    let mut upper: Vec<usize> = Vec::with_capacity(order.len());
    for &k in order.iter().rev() {
        while upper.len() >= 2 && cross(&upper, k) <= 0.0 {
            upper.pop();
        }
        upper.push(k);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}
