//! Cubic base case: test every ordered pair as a candidate hull edge.
//!
//! A pair `(p, q)` is an edge iff no point lies strictly on both sides of `p→q` and every
//! collinear point lies in the closed segment `[p, q]`. The segment rule keeps only the
//! extreme endpoints of collinear runs (including fully collinear inputs).

use nalgebra::Vector2;

use super::order::clockwise_sort;
use super::predicates::{lex_cmp, orientation, within_segment, Orientation};

/// Brute-force hull in clockwise order. O(n³); intended for small inputs only.
///
/// The input may be unsorted and contain duplicates; it is copied, not mutated.
pub fn brute_force_hull(points: &[Vector2<f64>], eps: f64) -> Vec<Vector2<f64>> {
    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    clockwise_sort(&extreme_points(&pts, eps))
}

/// Edge endpoints of the hull of distinct points, in discovery order.
pub(crate) fn extreme_points(pts: &[Vector2<f64>], eps: f64) -> Vec<Vector2<f64>> {
    if pts.len() < 3 {
        return pts.to_vec();
    }
    let mut out: Vec<Vector2<f64>> = Vec::new();
    for (ip, &p) in pts.iter().enumerate() {
        for (iq, &q) in pts.iter().enumerate() {
            if ip == iq {
                continue;
            }
            if is_edge(pts, ip, iq, eps) {
                if !out.contains(&p) {
                    out.push(p);
                }
                if !out.contains(&q) {
                    out.push(q);
                }
            }
        }
    }
    out
}

fn is_edge(pts: &[Vector2<f64>], ip: usize, iq: usize, eps: f64) -> bool {
    let (p, q) = (pts[ip], pts[iq]);
    let mut cw = 0usize;
    let mut ccw = 0usize;
    for (ir, &r) in pts.iter().enumerate() {
        if ir == ip || ir == iq {
            continue;
        }
        match orientation(p, q, r, eps) {
            Orientation::Clockwise => cw += 1,
            Orientation::CounterClockwise => ccw += 1,
            Orientation::Collinear => {
                if !within_segment(p, q, r) {
                    return false;
                }
            }
        }
        if cw > 0 && ccw > 0 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull2::validate::same_vertex_set;
    use nalgebra::vector;

    #[test]
    fn triangle_with_interior_point() {
        let pts = [
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![2.0, 3.0],
            vector![2.0, 1.0],
        ];
        let h = brute_force_hull(&pts, f64::EPSILON);
        assert!(same_vertex_set(
            &h,
            &[vector![0.0, 0.0], vector![4.0, 0.0], vector![2.0, 3.0]]
        ));
    }

    #[test]
    fn collinear_run_keeps_extremes() {
        let pts = [
            vector![2.0, 2.0],
            vector![0.0, 0.0],
            vector![3.0, 3.0],
            vector![1.0, 1.0],
        ];
        let h = brute_force_hull(&pts, f64::EPSILON);
        assert_eq!(h, vec![vector![0.0, 0.0], vector![3.0, 3.0]]);
    }

    #[test]
    fn points_on_edges_are_dropped() {
        // Unit-square corners plus edge midpoints.
        let pts = [
            vector![0.0, 0.0],
            vector![0.5, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 0.5],
            vector![1.0, 1.0],
            vector![0.5, 1.0],
            vector![0.0, 1.0],
            vector![0.0, 0.5],
        ];
        let h = brute_force_hull(&pts, f64::EPSILON);
        assert_eq!(h.len(), 4);
        assert!(same_vertex_set(
            &h,
            &[
                vector![0.0, 0.0],
                vector![1.0, 0.0],
                vector![1.0, 1.0],
                vector![0.0, 1.0]
            ]
        ));
    }

    #[test]
    fn duplicates_and_tiny_inputs() {
        let p = vector![1.0, -1.0];
        assert_eq!(brute_force_hull(&[p, p, p], f64::EPSILON), vec![p]);
        assert!(brute_force_hull(&[], f64::EPSILON).is_empty());
        let q = vector![0.0, 5.0];
        let h = brute_force_hull(&[q, p, q], f64::EPSILON);
        assert!(same_vertex_set(&h, &[p, q]));
    }
}
