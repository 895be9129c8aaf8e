//! Tangent (bridge) search between two x-separated hulls.
//!
//! Both walks start from the seam: `l` at the rightmost point of the left hull,
//! `r` at the leftmost point of the right hull. The two hulls never share a
//! position; the builder coalesces coincident seam points before walking.
//! - Upper chain: `l` steps counter-clockwise and `r` clockwise while the
//!   neighbour bends left of the candidate bridge.
//! - Lower chain: `l` steps clockwise and `r` counter-clockwise while the
//!   neighbour bends right of it.
//!
//! Collinear policy: a walk also steps when the neighbour, the current point,
//! and the opposite bridge end are collinear with the current point strictly
//! inside. Bridge endpoints are therefore always strict extreme points, and
//! two collinear halves bridge between their outermost points.

use nalgebra::Vector2;

use super::types::{HullLinks, PointId};
use crate::orient::{lies_between, turn_eps, Turn};

/// Which tangent a walk is looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chain {
    Upper,
    Lower,
}

impl Chain {
    /// Turn that proves the current bridge is not yet tangent.
    #[inline]
    fn outward(self) -> Turn {
        match self {
            Chain::Upper => Turn::Left,
            Chain::Lower => Turn::Right,
        }
    }
}

/// Candidate bridge from a left-hull point to a right-hull point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bridge {
    pub l: PointId,
    pub r: PointId,
}

/// Read-only view of the two hulls being merged.
pub(super) struct Walker<'a> {
    points: &'a [Vector2<f64>],
    links: &'a HullLinks,
    eps_det: f64,
    /// Upper bound on advances; a correct walk never takes this many.
    max_steps: usize,
}

impl<'a> Walker<'a> {
    pub(super) fn new(
        points: &'a [Vector2<f64>],
        links: &'a HullLinks,
        eps_det: f64,
        max_steps: usize,
    ) -> Self {
        Self {
            points,
            links,
            eps_det,
            max_steps,
        }
    }

    /// Walk from `seed` to the tangent of `chain`.
    pub(super) fn walk(&self, chain: Chain, seed: Bridge) -> Bridge {
        let mut bridge = seed;
        for _ in 0..=self.max_steps {
            if let Some(next) = self.advance_left(chain, bridge) {
                bridge.l = next;
                continue;
            }
            if let Some(next) = self.advance_right(chain, bridge) {
                bridge.r = next;
                continue;
            }
            return bridge;
        }
        tracing::warn!(
            ?chain,
            l = bridge.l.0,
            r = bridge.r.0,
            "bridge walk exceeded its step bound; input is likely unsorted"
        );
        bridge
    }

    /// Next left-hull point if the left end must move.
    fn advance_left(&self, chain: Chain, b: Bridge) -> Option<PointId> {
        let next = match chain {
            Chain::Upper => self.links.ccw(b.l)?,
            Chain::Lower => self.links.cw(b.l)?,
        };
        let (n, l, r) = (self.at(next), self.at(b.l), self.at(b.r));
        self.steps(chain, n, l, r, lies_between(n, l, r))
            .then_some(next)
    }

    /// Next right-hull point if the right end must move.
    fn advance_right(&self, chain: Chain, b: Bridge) -> Option<PointId> {
        let next = match chain {
            Chain::Upper => self.links.cw(b.r)?,
            Chain::Lower => self.links.ccw(b.r)?,
        };
        let (l, r, n) = (self.at(b.l), self.at(b.r), self.at(next));
        self.steps(chain, l, r, n, lies_between(l, r, n))
            .then_some(next)
    }

    #[inline]
    fn steps(
        &self,
        chain: Chain,
        a: Vector2<f64>,
        b: Vector2<f64>,
        c: Vector2<f64>,
        inside: bool,
    ) -> bool {
        match turn_eps(a, b, c, self.eps_det) {
            Turn::Collinear => inside,
            t => t == chain.outward(),
        }
    }

    #[inline]
    fn at(&self, p: PointId) -> Vector2<f64> {
        self.points[p.0]
    }
}
