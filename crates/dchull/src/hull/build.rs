//! Recursive hull construction over index ranges of one sorted slice.

use std::ops::Range;

use nalgebra::Vector2;
use tracing::trace;

use super::bridge::{Bridge, Chain, Walker};
use super::observe::{MergeObserver, NoObserver};
use super::types::{HullLinks, PointId};
use crate::cfg::HullCfg;
use crate::orient::{turn_eps, Turn};

/// Build the hull of `points` with default tolerances and no observer.
///
/// Pre: `points` sorted by increasing x, ties by increasing y; at least two
/// points. Not checked; see `try_build_hull` for the validating variant.
/// Post: surviving points form one circular hull in the returned links;
/// discarded points have no links. Of coincident points only the first keeps
/// links. Fewer than two points leaves everything unlinked.
pub fn build_hull(points: &[Vector2<f64>]) -> HullLinks {
    build_hull_with(points, HullCfg::default(), &mut NoObserver)
}

/// [`build_hull`] with explicit tolerances and an observer that sees every
/// intermediate hull.
pub fn build_hull_with<O>(points: &[Vector2<f64>], cfg: HullCfg, observer: &mut O) -> HullLinks
where
    O: MergeObserver + ?Sized,
{
    let mut builder = Builder {
        points,
        cfg,
        links: HullLinks::new(points.len()),
        observer,
    };
    if points.len() >= 2 {
        builder.build(0..points.len());
    }
    builder.links
}

struct Builder<'a, O: ?Sized> {
    points: &'a [Vector2<f64>],
    cfg: HullCfg,
    links: HullLinks,
    observer: &'a mut O,
}

impl<O: MergeObserver + ?Sized> Builder<'_, O> {
    fn build(&mut self, range: Range<usize>) {
        match range.len() {
            0 | 1 => return,
            2 | 3 => self.link_base(range.clone()),
            n => {
                let mid = range.start + n / 2;
                self.build(range.start..mid);
                self.build(mid..range.end);
                self.merge(range.start, mid, range.end);
            }
        }
        self.observer.on_hull(range, &self.links);
    }

    /// Link the distinct positions of a two- or three-point range. The first
    /// point of each run of coincident points stands for the whole run.
    fn link_base(&mut self, range: Range<usize>) {
        let mut reps = [PointId(range.start); 3];
        let mut k = 0;
        for i in range {
            if k == 0 || self.points[i] != self.points[reps[k - 1].0] {
                reps[k] = PointId(i);
                k += 1;
            }
        }
        match reps[..k] {
            [p] => self.links.link(p, p, p),
            [a, b] => self.link_pair(a, b),
            [p0, p1, p2] => self.link_triple(p0, p1, p2),
            _ => {}
        }
    }

    /// Degenerate 2-cycle: each point is the other's neighbour both ways.
    fn link_pair(&mut self, a: PointId, b: PointId) {
        self.links.link(a, b, b);
        self.links.link(b, a, a);
    }

    fn link_triple(&mut self, p0: PointId, p1: PointId, p2: PointId) {
        match self.turn(p0, p1, p2) {
            // ccw: p0 → p1 → p2 → p0
            Turn::Left => {
                self.links.link(p0, p2, p1);
                self.links.link(p1, p0, p2);
                self.links.link(p2, p1, p0);
            }
            // cw: p0 → p1 → p2 → p0
            Turn::Right => {
                self.links.link(p0, p1, p2);
                self.links.link(p1, p2, p0);
                self.links.link(p2, p0, p1);
            }
            // Endpoints hang off the middle; the middle reaches both ends.
            Turn::Collinear => {
                self.links.link(p0, p1, p1);
                self.links.link(p1, p2, p0);
                self.links.link(p2, p1, p1);
            }
        }
    }

    /// A collinear triple is the segment between its endpoints once it takes
    /// part in a merge; the middle point can never be extreme.
    fn collapse_collinear(&mut self, half: Range<usize>) {
        if half.len() != 3 {
            return;
        }
        let (p0, p1, p2) = (
            PointId(half.start),
            PointId(half.start + 1),
            PointId(half.start + 2),
        );
        // Only the collinear base case leaves an endpoint hanging off the middle.
        if self.links.cw(p2) == Some(p1) && self.links.ccw(p2) == Some(p1) {
            self.links.clear(p1);
            self.link_pair(p0, p2);
        }
    }

    fn first_linked(&self, range: Range<usize>) -> Option<PointId> {
        range.map(PointId).find(|&p| self.links.is_on_hull(p))
    }

    fn last_linked(&self, range: Range<usize>) -> Option<PointId> {
        range.rev().map(PointId).find(|&p| self.links.is_on_hull(p))
    }

    /// Seam points of the two hulls: the rightmost of the left one and the
    /// leftmost of the right one. When both sit on the same position the
    /// right copy leaves its hull; `None` means the right hull was that
    /// single position and the left hull already covers the range.
    fn seeds(&mut self, lo: usize, mid: usize, hi: usize) -> Option<Bridge> {
        let l = self.last_linked(lo..mid)?;
        let mut r = self.first_linked(mid..hi)?;
        if self.points[l.0] == self.points[r.0] {
            if !self.links.detach(r) {
                return None;
            }
            r = self.first_linked(r.0 + 1..hi)?;
        }
        Some(Bridge { l, r })
    }

    /// Join the hulls of `lo..mid` and `mid..hi` into one hull of `lo..hi`.
    fn merge(&mut self, lo: usize, mid: usize, hi: usize) {
        self.collapse_collinear(lo..mid);
        self.collapse_collinear(mid..hi);

        let Some(seed) = self.seeds(lo, mid, hi) else {
            trace!(lo, hi, "right half coincides with the seam point");
            return;
        };
        let walker = Walker::new(self.points, &self.links, self.cfg.eps_det, hi - lo);
        let upper = walker.walk(Chain::Upper, seed);
        let lower = walker.walk(Chain::Lower, seed);

        // Points the splice cuts off: the seam-side arcs between the bridge
        // endpoints, read before any link changes.
        let limit = hi - lo;
        let mut cut = self.links.cw_arc(upper.l, lower.l, limit);
        cut.extend(self.links.cw_arc(lower.r, upper.r, limit));

        self.links.set_cw(upper.l, upper.r);
        self.links.set_ccw(upper.r, upper.l);
        self.links.set_cw(lower.r, lower.l);
        self.links.set_ccw(lower.l, lower.r);

        for &p in &cut {
            self.links.clear(p);
        }
        trace!(
            lo,
            hi,
            upper = ?(upper.l.0, upper.r.0),
            lower = ?(lower.l.0, lower.r.0),
            discarded = cut.len(),
            "merged"
        );
        self.observer.on_merge(lo..hi, upper, lower);
    }

    #[inline]
    fn turn(&self, a: PointId, b: PointId, c: PointId) -> Turn {
        turn_eps(
            self.points[a.0],
            self.points[b.0],
            self.points[c.0],
            self.cfg.eps_det,
        )
    }
}
