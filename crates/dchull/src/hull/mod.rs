//! Divide-and-conquer hull builder.
//!
//! Purpose
//! - Build the convex hull of an x-sorted point slice by recursive halving,
//!   representing every partial hull as a circular doubly-linked cycle stored
//!   in [`HullLinks`] side tables (one `cw`/`ccw` slot per point).
//!
//! Recursion
//! - Each call owns a half-open index range. Two and three points are linked
//!   directly; larger ranges split at `floor(n/2)`, build both halves, then
//!   find the upper and lower bridges (`bridge.rs`), splice them in, and clear
//!   the links of every point the bridges walked past. Those are the seam-side
//!   arcs the splice cuts off, and that is how they are collected.
//! - Coincident points collapse onto the first of their run; a hull of one
//!   position is a point linked to itself.
//!
//! Layout
//! - `types.rs` (ids, link tables), `bridge.rs` (tangent walks), `build.rs`
//!   (recursion and splice), `observe.rs` (snapshot hooks), `checked.rs`
//!   (validation, unordered input, errors).

mod bridge;
mod build;
mod checked;
mod observe;
mod types;

pub use bridge::{Bridge, Chain};
pub use build::{build_hull, build_hull_with};
pub use checked::{
    cmp_xy, convex_hull, sort_points, sorted_order, try_build_hull, validate_input, Hull,
    HullError,
};
pub use observe::{HullSnapshot, MergeObserver, NoObserver, SnapshotRecorder};
pub use types::{HullLinks, PointId};
