//! Hooks into the recursion for visualization and debugging.
//!
//! The builder reports every sub-hull right after it is finished (post-order,
//! base cases included), and every pair of bridges right after a splice.

use std::ops::Range;

use super::bridge::Bridge;
use super::types::{HullLinks, PointId};

/// Receives intermediate hulls while `build_hull_with` runs.
pub trait MergeObserver {
    /// `range` just became one hull; `links` holds its final adjacency.
    fn on_hull(&mut self, range: Range<usize>, links: &HullLinks);

    /// The halves of `range` were joined by `upper` and `lower`.
    fn on_merge(&mut self, _range: Range<usize>, _upper: Bridge, _lower: Bridge) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObserver;

impl MergeObserver for NoObserver {
    #[inline]
    fn on_hull(&mut self, _range: Range<usize>, _links: &HullLinks) {}
}

/// Structural copy of one intermediate hull.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HullSnapshot {
    pub range: Range<usize>,
    /// Clockwise traversal from the lowest-index hull point in `range`.
    pub cycle_cw: Vec<PointId>,
    /// Bridges used to build this hull; `None` for base cases and for merges
    /// whose right half held only the seam position.
    pub bridges: Option<(Bridge, Bridge)>,
}

/// Records a [`HullSnapshot`] per recursive call.
#[derive(Clone, Debug, Default)]
pub struct SnapshotRecorder {
    pub snapshots: Vec<HullSnapshot>,
    pending: Option<(Range<usize>, Bridge, Bridge)>,
}

impl SnapshotRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the full hull, i.e. the last one recorded.
    pub fn last(&self) -> Option<&HullSnapshot> {
        self.snapshots.last()
    }
}

impl MergeObserver for SnapshotRecorder {
    fn on_hull(&mut self, range: Range<usize>, links: &HullLinks) {
        let cycle_cw = range
            .clone()
            .map(PointId)
            .find(|&p| links.is_on_hull(p))
            .map(|start| links.cycle_cw(start))
            .unwrap_or_default();
        let bridges = match self.pending.take() {
            Some((r, upper, lower)) if r == range => Some((upper, lower)),
            _ => None,
        };
        self.snapshots.push(HullSnapshot {
            range,
            cycle_cw,
            bridges,
        });
    }

    fn on_merge(&mut self, range: Range<usize>, upper: Bridge, lower: Bridge) {
        self.pending = Some((range, upper, lower));
    }
}
