//! Point identifiers and the clockwise/counter-clockwise link tables.

/// Position of a point in the caller's (sorted) slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// Hull adjacency side tables, one slot per input point.
///
/// Invariants (for a finished hull of size >= 3):
/// - A point is on the hull iff both of its links are `Some`.
/// - `cw(p) == Some(q)` implies `ccw(q) == Some(p)`.
/// - Following `cw` from any hull point visits every hull point once.
/// - No two hull points share coordinates; of a run of coincident points only
///   the first carries links.
///
/// Two-point hulls link each point to the other in both directions, and a
/// hull of one distinct position links its point to itself. The three-point
/// collinear base case is the one structure that breaks the cycle invariant:
/// both endpoints point at the middle, the middle points at both.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HullLinks {
    cw: Vec<Option<PointId>>,
    ccw: Vec<Option<PointId>>,
}

impl HullLinks {
    /// All `n` points unlinked.
    pub fn new(n: usize) -> Self {
        Self {
            cw: vec![None; n],
            ccw: vec![None; n],
        }
    }

    /// Number of points covered by the tables (hull or not).
    #[inline]
    pub fn len(&self) -> usize {
        self.cw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cw.is_empty()
    }

    #[inline]
    pub fn cw(&self, p: PointId) -> Option<PointId> {
        self.cw[p.0]
    }

    #[inline]
    pub fn ccw(&self, p: PointId) -> Option<PointId> {
        self.ccw[p.0]
    }

    #[inline]
    pub fn is_on_hull(&self, p: PointId) -> bool {
        self.cw[p.0].is_some() && self.ccw[p.0].is_some()
    }

    /// Points currently carrying links, in index order.
    pub fn hull_points(&self) -> impl Iterator<Item = PointId> + '_ {
        (0..self.len()).map(PointId).filter(|&p| self.is_on_hull(p))
    }

    pub fn hull_len(&self) -> usize {
        self.hull_points().count()
    }

    /// Lowest-index point on the hull. For sorted input this is the
    /// lexicographically smallest hull point.
    pub fn start(&self) -> Option<PointId> {
        self.hull_points().next()
    }

    /// Follow `cw` links from `start` until the walk returns to a visited point.
    ///
    /// On a proper hull this is the full clockwise cycle beginning at `start`.
    pub fn cycle_cw(&self, start: PointId) -> Vec<PointId> {
        self.follow(start, |p| self.cw(p))
    }

    /// Counter-clockwise counterpart of [`HullLinks::cycle_cw`].
    pub fn cycle_ccw(&self, start: PointId) -> Vec<PointId> {
        self.follow(start, |p| self.ccw(p))
    }

    fn follow(&self, start: PointId, next: impl Fn(PointId) -> Option<PointId>) -> Vec<PointId> {
        let mut out = Vec::new();
        if !self.is_on_hull(start) {
            return out;
        }
        let mut seen = vec![false; self.len()];
        let mut cur = start;
        while !seen[cur.0] {
            seen[cur.0] = true;
            out.push(cur);
            match next(cur) {
                Some(q) => cur = q,
                None => break,
            }
        }
        out
    }

    /// Directed clockwise edges `(p, cw(p))` of every linked point.
    pub fn edges(&self) -> impl Iterator<Item = (PointId, PointId)> + '_ {
        self.hull_points()
            .filter_map(move |p| self.cw(p).map(|q| (p, q)))
    }

    /// Check the cycle invariants: half-linked points are rejected, links are
    /// mutual, and the `cw` cycle from `start()` covers every linked point.
    pub fn is_consistent(&self) -> bool {
        for i in 0..self.len() {
            if self.cw[i].is_some() != self.ccw[i].is_some() {
                return false;
            }
        }
        let Some(start) = self.start() else {
            return true;
        };
        let on_hull = self.hull_len();
        if on_hull == 1 {
            return self.cw(start) == Some(start) && self.ccw(start) == Some(start);
        }
        for p in self.hull_points() {
            let (Some(next), Some(prev)) = (self.cw(p), self.ccw(p)) else {
                return false;
            };
            if next == p || prev == p || !self.is_on_hull(next) || !self.is_on_hull(prev) {
                return false;
            }
            if self.ccw(next) != Some(p) || self.cw(prev) != Some(p) {
                return false;
            }
        }
        self.cycle_cw(start).len() == on_hull
    }

    #[inline]
    pub(crate) fn set_cw(&mut self, p: PointId, q: PointId) {
        self.cw[p.0] = Some(q);
    }

    #[inline]
    pub(crate) fn set_ccw(&mut self, p: PointId, q: PointId) {
        self.ccw[p.0] = Some(q);
    }

    #[inline]
    pub(crate) fn link(&mut self, p: PointId, cw: PointId, ccw: PointId) {
        self.set_cw(p, cw);
        self.set_ccw(p, ccw);
    }

    /// Drop `p` from whatever hull it was on.
    #[inline]
    pub(crate) fn clear(&mut self, p: PointId) {
        self.cw[p.0] = None;
        self.ccw[p.0] = None;
    }

    /// Remove `p` from its cycle and close the gap. Returns false when `p`
    /// was the only point of its hull.
    pub(crate) fn detach(&mut self, p: PointId) -> bool {
        let (Some(next), Some(prev)) = (self.cw(p), self.ccw(p)) else {
            return false;
        };
        self.clear(p);
        if next == p {
            return false;
        }
        if next == prev {
            self.link(next, next, next);
        } else {
            self.set_cw(prev, next);
            self.set_ccw(next, prev);
        }
        true
    }

    /// Points strictly after `from` and before `to` along `cw` links, at
    /// most `limit` of them. With `from == to` this is the rest of the cycle.
    pub(crate) fn cw_arc(&self, from: PointId, to: PointId, limit: usize) -> Vec<PointId> {
        let mut out = Vec::new();
        let mut cur = self.cw(from);
        while let Some(p) = cur {
            if p == to || p == from || out.len() >= limit {
                break;
            }
            out.push(p);
            cur = self.cw(p);
        }
        out
    }
}
