//! Planar convex hulls by divide and conquer.
//!
//! Points live in a caller-owned, `(x, y)`-sorted slice of `Vector2<f64>`.
//! Hull adjacency lives beside it in [`HullLinks`]: one clockwise and one
//! counter-clockwise neighbour slot per point, `None` for interior points.
//!
//! Modules
//! - `orient`: signed-area orientation predicate.
//! - `hull`: recursive builder, bridge walks, link tables, observers.
//! - `reference`: monotone chain oracle used for verification.
//! - `cloud`: reproducible random point clouds.
//! - `cfg`: builder tolerances.

pub mod cfg;
pub mod cloud;
pub mod hull;
pub mod orient;
pub mod reference;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::HullCfg;
pub use hull::{
    build_hull, build_hull_with, convex_hull, try_build_hull, Hull, HullError, HullLinks, PointId,
};
pub use nalgebra::Vector2 as Vec2;
pub use orient::{turn, Turn};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::HullCfg;
    pub use crate::cloud::{draw_cloud, CloudCfg, CloudFamily, ReplayToken};
    pub use crate::hull::{
        build_hull, build_hull_with, convex_hull, sort_points, try_build_hull, validate_input,
        Hull, HullError, HullLinks, HullSnapshot, MergeObserver, NoObserver, PointId,
        SnapshotRecorder,
    };
    pub use crate::orient::{signed_area2, turn, turn_eps, Turn};
    pub use crate::reference::monotone_chain;
    pub use nalgebra::Vector2 as Vec2;
}
