//! Print the intermediate hulls for two point clusters.
//!
//! Usage:
//!   cargo run -p dchull --example two_clusters -- [seed]

use dchull::cloud::{draw_cloud, CloudCfg, CloudFamily, ReplayToken};
use dchull::hull::SnapshotRecorder;
use dchull::{build_hull_with, HullCfg};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let cfg = CloudCfg {
        family: CloudFamily::Clusters {
            count: 2,
            spread: 1.0,
        },
        count: 16,
    };
    let points = draw_cloud(cfg, ReplayToken::new(seed, 0));
    let mut rec = SnapshotRecorder::new();
    let links = build_hull_with(&points, HullCfg::default(), &mut rec);
    for s in &rec.snapshots {
        let ids: Vec<usize> = s.cycle_cw.iter().map(|p| p.0).collect();
        println!("{:>2}..{:<2} cw {:?}", s.range.start, s.range.end, ids);
    }
    let interior = points.len() - links.hull_len();
    println!(
        "final hull: {} of {} points ({interior} interior)",
        links.hull_len(),
        points.len()
    );
}
