//! Criterion benchmarks for hull construction.
//! Focus sizes: n in {100, 1k, 10k, 100k}, disk and circle clouds.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p dchull

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dchull::cloud::{draw_cloud, CloudCfg, CloudFamily, ReplayToken};
use dchull::reference::monotone_chain;
use dchull::{build_hull, build_hull_with, hull::SnapshotRecorder, HullCfg};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[100usize, 1_000, 10_000, 100_000] {
        let disk = draw_cloud(
            CloudCfg {
                family: CloudFamily::UniformDisk { radius: 1.0 },
                count: n,
            },
            ReplayToken::new(43, n as u64),
        );
        let circle = draw_cloud(
            CloudCfg {
                family: CloudFamily::Circle { radius: 1.0 },
                count: n,
            },
            ReplayToken::new(44, n as u64),
        );

        group.bench_with_input(BenchmarkId::new("dc_disk", n), &disk, |b, pts| {
            b.iter(|| build_hull(pts))
        });
        group.bench_with_input(BenchmarkId::new("dc_circle", n), &circle, |b, pts| {
            b.iter(|| build_hull(pts))
        });
        group.bench_with_input(BenchmarkId::new("monotone_disk", n), &disk, |b, pts| {
            b.iter(|| monotone_chain(pts))
        });
        if n <= 10_000 {
            group.bench_with_input(BenchmarkId::new("dc_disk_snapshots", n), &disk, |b, pts| {
                b.iter(|| {
                    let mut rec = SnapshotRecorder::new();
                    build_hull_with(pts, HullCfg::default(), &mut rec)
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
