//! Random planar point sets (seeded, replayable).
//!
//! Purpose
//! - Deterministic inputs for cross-validation tests, benchmarks and the CLI `gen`/`bench`
//!   subcommands.
//!
//! Model
//! - `Square`: uniform in `[-w, w]²`.
//! - `Disk`: uniform in the disk of radius `w` (sqrt-radius sampling).
//! - `Circle`: on the circle of radius `w`; every point is extreme, the worst case for
//!   hull size.
//! - `Lattice`: integer coordinates in `[-w, w]²`; many duplicates and collinear runs.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointDist {
    Square,
    Disk,
    Circle,
    Lattice,
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub n: usize,
    pub dist: PointDist,
    /// Half-width of the square / radius of the disk and circle.
    pub half_width: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            n: 100,
            dist: PointDist::Square,
            half_width: 100.0,
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

    /// Next token in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw `cfg.n` points from `cfg.dist`.
pub fn draw_points(cfg: SampleCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let w = cfg.half_width.abs().max(1e-9);
    (0..cfg.n).map(|_| sample_one(&mut rng, cfg.dist, w)).collect()
}

fn sample_one<R: Rng>(rng: &mut R, dist: PointDist, w: f64) -> Vector2<f64> {
    match dist {
        PointDist::Square => Vector2::new(rng.gen_range(-w..=w), rng.gen_range(-w..=w)),
        PointDist::Disk => {
            let th = rng.gen::<f64>() * TAU;
            let r = w * rng.gen::<f64>().sqrt();
            Vector2::new(r * th.cos(), r * th.sin())
        }
        PointDist::Circle => {
            let th = rng.gen::<f64>() * TAU;
            Vector2::new(w * th.cos(), w * th.sin())
        }
        PointDist::Lattice => {
            let k = w.round().max(1.0) as i64;
            Vector2::new(
                rng.gen_range(-k..=k) as f64,
                rng.gen_range(-k..=k) as f64,
            )
        }
    }
}
