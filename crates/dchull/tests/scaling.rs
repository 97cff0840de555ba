//! Wall-clock scaling of `compute_hull`.
//!
//! Ignored by default (timing-sensitive); run with `cargo test --release -- --ignored`.

use std::time::Instant;

use dchull::compute_hull;
use dchull::hull2::rand::{draw_points, PointDist, ReplayToken, SampleCfg};

fn best_of(reps: usize, n: usize) -> f64 {
    let pts = draw_points(
        SampleCfg {
            n,
            dist: PointDist::Disk,
            half_width: 1000.0,
        },
        ReplayToken::new(2024, n as u64),
    );
    (0..reps)
        .map(|_| {
            let t0 = Instant::now();
            let h = compute_hull(&pts).unwrap();
            assert!(!h.is_empty());
            t0.elapsed().as_secs_f64()
        })
        .fold(f64::INFINITY, f64::min)
}

#[test]
#[ignore]
fn time_grows_like_n_log_n() {
    let small = 20_000usize;
    let large = 16 * small;
    let t_small = best_of(5, small);
    let t_large = best_of(5, large);
    let expected = (large as f64 * (large as f64).ln()) / (small as f64 * (small as f64).ln());
    let ratio = t_large / t_small.max(1e-9);
    // Quadratic growth would give a ratio of 256; allow generous noise above n log n.
    assert!(
        ratio < 3.0 * expected,
        "ratio {ratio:.1} vs n log n {expected:.1} (t_small={t_small:.4}s, t_large={t_large:.4}s)"
    );
}
