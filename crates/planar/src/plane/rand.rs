//! Random point clouds and circle sets (replay tokens).
//!
//! Purpose
//! - Small, deterministic samplers feeding benches and property tests of the
//!   pair searches and the enclosing circle.
//!
//! Model
//! - Points are uniform in an axis-aligned box `[-half_extent, half_extent]²`
//!   around `center`. Circles reuse those points as centers with radii uniform
//!   in `[0, max_radius]`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Circle, Point};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub center: Point,
    /// Half side of the sampling box. Clamped to be non-negative.
    pub half_extent: f64,
    /// Upper bound for circle radii in `draw_circles`.
    pub max_radius: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 64,
            center: Point::new(0.0, 0.0),
            half_extent: 10.0,
            max_radius: 1.0,
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

fn sample_point<R: Rng>(rng: &mut R, cfg: &CloudCfg) -> Point {
    let h = cfg.half_extent.max(0.0);
    Point::new(
        cfg.center.x + (rng.gen::<f64>() * 2.0 - 1.0) * h,
        cfg.center.y + (rng.gen::<f64>() * 2.0 - 1.0) * h,
    )
}

/// Draw `cfg.count` points.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count).map(|_| sample_point(&mut rng, &cfg)).collect()
}

/// Draw `cfg.count` circles.
pub fn draw_circles(cfg: CloudCfg, tok: ReplayToken) -> Vec<Circle> {
    let mut rng = tok.to_std_rng();
    let r_max = cfg.max_radius.max(0.0);
    (0..cfg.count)
        .map(|_| {
            let center = sample_point(&mut rng, &cfg);
            Circle::new(center, rng.gen::<f64>() * r_max)
        })
        .collect()
}
