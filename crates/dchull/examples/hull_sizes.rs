//! Print hull sizes for each sampler, for a quick sanity check on counts.
//!
//! Usage:
//!   cargo run -p dchull --example hull_sizes -- 1000
//!
//! Uniform square/disk inputs keep few vertices; circle inputs keep all of them.

use dchull::prelude::*;

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1000);
    for dist in [
        PointDist::Square,
        PointDist::Disk,
        PointDist::Circle,
        PointDist::Lattice,
    ] {
        let cfg = SampleCfg {
            n,
            dist,
            half_width: 50.0,
        };
        for index in 0..3 {
            let pts = draw_points(cfg, ReplayToken::new(2025, index));
            match compute_hull(&pts) {
                Ok(h) => println!(
                    "{dist:?} #{index}: n={n} hull={} area={:.3}",
                    h.len(),
                    h.area()
                ),
                Err(e) => eprintln!("{dist:?} #{index}: {e}"),
            }
        }
    }
}
