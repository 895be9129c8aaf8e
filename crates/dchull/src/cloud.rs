//! Random planar point clouds (seeded, replayable).
//!
//! Purpose
//! - Deterministic inputs for tests, benches, and the CLI `gen` command.
//! - Every draw is keyed by a replay token `(seed, index)` mixed into one RNG,
//!   so a single cloud can be regenerated without replaying the whole stream.
//!
//! Output is sorted by `(x, y)`, ready for `build_hull`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hull::sort_points;

/// Shape of the sampled cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudFamily {
    /// Uniform in `[-half_width, half_width]²`.
    UniformBox { half_width: f64 },
    /// Uniform in the disk of `radius` around the origin.
    UniformDisk { radius: f64 },
    /// `count` disks of radius `spread`, centres spaced along the x axis.
    Clusters { count: usize, spread: f64 },
    /// Random angles on a circle: every point is extreme.
    Circle { radius: f64 },
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudCfg {
    pub family: CloudFamily,
    /// Number of points; at least 2 are always drawn.
    pub count: usize,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            family: CloudFamily::UniformDisk { radius: 1.0 },
            count: 256,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one cloud, sorted by `(x, y)`.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.max(2);
    let mut pts: Vec<Vector2<f64>> = match cfg.family {
        CloudFamily::UniformBox { half_width } => {
            let w = half_width.abs().max(1e-9);
            (0..n)
                .map(|_| Vector2::new(rng.gen_range(-w..=w), rng.gen_range(-w..=w)))
                .collect()
        }
        CloudFamily::UniformDisk { radius } => {
            let r0 = radius.abs().max(1e-9);
            (0..n).map(|_| sample_disk(&mut rng, r0)).collect()
        }
        CloudFamily::Clusters { count, spread } => {
            let k = count.max(1);
            let s = spread.abs().max(1e-9);
            let centres: Vec<Vector2<f64>> = (0..k)
                .map(|i| Vector2::new(i as f64 * 6.0 * s, rng.gen_range(-s..=s)))
                .collect();
            (0..n)
                .map(|i| centres[i % k] + sample_disk(&mut rng, s))
                .collect()
        }
        CloudFamily::Circle { radius } => {
            let r0 = radius.abs().max(1e-9);
            (0..n)
                .map(|_| {
                    let th = rng.gen::<f64>() * std::f64::consts::TAU;
                    Vector2::new(th.cos() * r0, th.sin() * r0)
                })
                .collect()
        }
    };
    sort_points(&mut pts);
    pts
}

#[inline]
fn sample_disk<R: Rng>(rng: &mut R, radius: f64) -> Vector2<f64> {
    let th = rng.gen::<f64>() * std::f64::consts::TAU;
    let r = radius * rng.gen::<f64>().sqrt();
    Vector2::new(th.cos() * r, th.sin() * r)
}
