//! Divide-and-conquer driver: validate, sort, split, recurse, merge.
//!
//! Conventions
//! - Input is copied, sorted by (x, y) ascending and stripped of exact duplicates.
//! - Sub-hulls are clockwise and start at their leftmost vertex.
//! - Splits land where the x-coordinate changes, so the two halves are strictly
//!   separated by the divider `x = (left.last.x + right.first.x) / 2`.

use nalgebra::Vector2;

use super::brute::extreme_points;
use super::error::HullError;
use super::merge::{merge_hulls, rotate_to_leftmost};
use super::order::clockwise_sort;
use super::predicates::lex_cmp;
use super::types::{Hull2, HullCfg};

/// Convex hull with the default configuration.
pub fn compute_hull(points: &[Vector2<f64>]) -> Result<Hull2, HullError> {
    compute_hull_with(points, HullCfg::default())
}

/// Convex hull of `points` as a clockwise cycle (no closing vertex).
///
/// - Empty input gives an empty hull; one or two distinct points are returned in the
///   order they first appear in `points`.
/// - Collinear input reduces to its two extreme points.
/// - Non-finite coordinates fail with `HullError::InvalidInput` before any work.
pub fn compute_hull_with(points: &[Vector2<f64>], cfg: HullCfg) -> Result<Hull2, HullError> {
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::InvalidInput { index });
    }
    let sorted = sorted_unique(points);
    let out = if sorted.len() <= 2 {
        // Nothing to orient: keep the caller's order.
        first_occurrences(points)
    } else {
        clockwise_sort(&hull_sorted(&sorted, &cfg)?)
    };
    tracing::debug!(
        n_input = points.len(),
        n_unique = sorted.len(),
        n_hull = out.len(),
        "compute_hull"
    );
    Ok(Hull2::from_ordered(out))
}

/// Sorted (x, then y) copy without exact duplicates.
pub(crate) fn sorted_unique(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    pts
}

fn first_occurrences(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut out: Vec<Vector2<f64>> = Vec::with_capacity(2);
    for &p in points {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

/// Recursive core on a sorted, duplicate-free slice; returns a canonical sub-hull.
fn hull_sorted(pts: &[Vector2<f64>], cfg: &HullCfg) -> Result<Vec<Vector2<f64>>, HullError> {
    let n = pts.len();
    if n <= 3 || n < cfg.brute_force_threshold {
        let mut h = clockwise_sort(&extreme_points(pts, cfg.eps));
        rotate_to_leftmost(&mut h);
        return Ok(h);
    }
    if pts[0].x == pts[n - 1].x {
        // One vertical column: the hull is its bottom and top point.
        return Ok(vec![pts[0], pts[n - 1]]);
    }
    let m = split_index(pts);
    let (left, right) = pts.split_at(m);
    let divider = 0.5 * (left[m - 1].x + right[0].x);
    let (a, b) = match cfg.parallel_cutoff {
        Some(cutoff) if n >= cutoff => {
            rayon::join(|| hull_sorted(left, cfg), || hull_sorted(right, cfg))
        }
        _ => (hull_sorted(left, cfg), hull_sorted(right, cfg)),
    };
    merge_hulls(a?, b?, divider, cfg.eps)
}

/// Split index closest to the median at which the x-coordinate strictly increases.
///
/// Requires at least two distinct x-coordinates.
fn split_index(pts: &[Vector2<f64>]) -> usize {
    let n = pts.len();
    let mid = n / 2;
    if pts[mid - 1].x < pts[mid].x {
        return mid;
    }
    (1..n)
        .filter(|&k| pts[k - 1].x < pts[k].x)
        .min_by_key(|&k| k.abs_diff(mid))
        .unwrap_or(mid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn split_avoids_shared_columns() {
        let pts = sorted_unique(&[
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![1.0, 2.0],
            vector![1.0, 3.0],
            vector![2.0, 0.0],
        ]);
        let m = split_index(&pts);
        assert!(pts[m - 1].x < pts[m].x);
        // Boundaries at 1 and 5 are equally far from the median; the first one wins.
        assert_eq!(m, 1);
    }

    #[test]
    fn sorted_unique_does_not_touch_input() {
        let input = vec![vector![2.0, 1.0], vector![0.0, 0.0], vector![2.0, 1.0]];
        let copy = input.clone();
        let s = sorted_unique(&input);
        assert_eq!(input, copy);
        assert_eq!(s, vec![vector![0.0, 0.0], vector![2.0, 1.0]]);
    }

    #[test]
    fn vertical_column_keeps_ends() {
        let pts: Vec<_> = (0..20).map(|k| vector![3.0, k as f64]).collect();
        let h = compute_hull(&pts).unwrap();
        assert!(h.same_vertex_set(&[vector![3.0, 0.0], vector![3.0, 19.0]]));
    }

    #[test]
    fn one_or_two_points_keep_input_order() {
        let (p, q) = (vector![3.0, 3.0], vector![0.0, 0.0]);
        assert_eq!(compute_hull(&[p, q, p]).unwrap().vertices(), &[p, q]);
        assert_eq!(compute_hull(&[q, p]).unwrap().vertices(), &[q, p]);
        assert_eq!(compute_hull(&[q, q]).unwrap().vertices(), &[q]);
    }

    #[test]
    fn rejects_non_finite() {
        let pts = [vector![0.0, 0.0], vector![1.0, f64::NAN], vector![2.0, 2.0]];
        assert_eq!(
            compute_hull(&pts),
            Err(HullError::InvalidInput { index: 1 })
        );
        let pts = [vector![f64::INFINITY, 0.0]];
        assert_eq!(
            compute_hull(&pts),
            Err(HullError::InvalidInput { index: 0 })
        );
    }
}
