//! Common upper/lower tangent of two x-separated convex hulls ("rotating fingers").
//!
//! Inputs are clockwise cycles `a` (left) and `b` (right) and a divider `x` with every
//! vertex of `a` at or left of it and every vertex of `b` at or right of it. The divider is
//! an x-coordinate, never a list index.
//!
//! Search
//! - Start at the rightmost vertex of `a` and the leftmost vertex of `b`.
//! - Upper: step `b` clockwise while that raises the crossing height at the divider,
//!   otherwise step `a` counter-clockwise; stop when neither raises it.
//! - Lower: mirrored (`b` counter-clockwise, `a` clockwise, "lower" instead of "higher").
//! - Accepted moves strictly improve the height, so the walk cannot cycle.
//! - Afterwards, a neighbour lying on the tangent line farther out replaces the endpoint,
//!   so tangent endpoints are extreme points.

use nalgebra::Vector2;

use super::error::HullError;
use super::predicates::{crossing_height, is_collinear, lex_cmp};

/// Anchors of the vertical divider line; any two distinct heights give the same crossing.
const ANCHOR_HI: f64 = 1.0;
const ANCHOR_LO: f64 = 0.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Upper,
    Lower,
}

/// Indices `(i, j)` of the upper tangent: `a[i]`–`b[j]` has no vertex strictly above it.
pub fn upper_tangent(
    a: &[Vector2<f64>],
    b: &[Vector2<f64>],
    divider: f64,
    eps: f64,
) -> Result<(usize, usize), HullError> {
    find_tangent(a, b, divider, eps, Side::Upper)
}

/// Indices `(i, j)` of the lower tangent: `a[i]`–`b[j]` has no vertex strictly below it.
pub fn lower_tangent(
    a: &[Vector2<f64>],
    b: &[Vector2<f64>],
    divider: f64,
    eps: f64,
) -> Result<(usize, usize), HullError> {
    find_tangent(a, b, divider, eps, Side::Lower)
}

#[inline]
fn height(p: Vector2<f64>, q: Vector2<f64>, divider: f64) -> Result<f64, HullError> {
    Ok(crossing_height(p, q, divider, ANCHOR_HI, ANCHOR_LO)?.y)
}

fn extreme_index(v: &[Vector2<f64>], rightmost: bool) -> usize {
    let it = v.iter().enumerate();
    let found = if rightmost {
        it.max_by(|(_, p), (_, q)| lex_cmp(p, q))
    } else {
        it.min_by(|(_, p), (_, q)| lex_cmp(p, q))
    };
    found.map_or(0, |(k, _)| k)
}

fn find_tangent(
    a: &[Vector2<f64>],
    b: &[Vector2<f64>],
    divider: f64,
    eps: f64,
    side: Side,
) -> Result<(usize, usize), HullError> {
    if a.is_empty() || b.is_empty() {
        return Err(HullError::DegenerateGeometry {
            what: "tangent of an empty hull",
        });
    }
    let (na, nb) = (a.len(), b.len());
    let mut i = extreme_index(a, true);
    let mut j = extreme_index(b, false);
    if !(a[i].x <= divider && divider <= b[j].x && a[i].x < b[j].x) {
        return Err(HullError::DegenerateGeometry {
            what: "hulls are not separated by the divider",
        });
    }

    // Upper: b forward (cw), a backward (ccw). Lower: the reverse.
    let (b_step, a_step) = match side {
        Side::Upper => (1, na - 1),
        Side::Lower => (nb - 1, 1),
    };
    let improves = |cand: f64, cur: f64| match side {
        Side::Upper => cand > cur,
        Side::Lower => cand < cur,
    };

    let mut h = height(a[i], b[j], divider)?;
    loop {
        let jn = (j + b_step) % nb;
        let hb = height(a[i], b[jn], divider)?;
        if improves(hb, h) {
            j = jn;
            h = hb;
            continue;
        }
        let ia = (i + a_step) % na;
        let ha = height(a[ia], b[j], divider)?;
        if improves(ha, h) {
            i = ia;
            h = ha;
            continue;
        }
        break;
    }

    // Absorb collinear neighbours that sit farther out on the same line.
    for _ in 0..nb {
        let jn = (j + b_step) % nb;
        let farther = (b[jn] - a[i]).norm_squared() > (b[j] - a[i]).norm_squared();
        if jn == j || !farther || !is_collinear(a[i], b[j], b[jn], eps) {
            break;
        }
        j = jn;
    }
    for _ in 0..na {
        let ia = (i + a_step) % na;
        let farther = (a[ia] - b[j]).norm_squared() > (a[i] - b[j]).norm_squared();
        if ia == i || !farther || !is_collinear(b[j], a[i], a[ia], eps) {
            break;
        }
        i = ia;
    }
    Ok((i, j))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull2::predicates::signed_area;
    use nalgebra::vector;

    // Clockwise, starting at the leftmost vertex.
    fn left_quad(sx: f64) -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![1.0 * sx, 3.0],
            vector![3.0 * sx, 2.0],
            vector![2.0 * sx, -1.0],
        ]
    }
    fn right_quad(sx: f64) -> Vec<Vector2<f64>> {
        vec![
            vector![5.0 * sx, 0.0],
            vector![6.0 * sx, 4.0],
            vector![8.0 * sx, 1.0],
            vector![6.0 * sx, -2.0],
        ]
    }

    fn all_below(p: Vector2<f64>, q: Vector2<f64>, pts: &[Vector2<f64>]) -> bool {
        pts.iter().all(|&r| signed_area(p, q, r) <= 1e-9)
    }
    fn all_above(p: Vector2<f64>, q: Vector2<f64>, pts: &[Vector2<f64>]) -> bool {
        pts.iter().all(|&r| signed_area(p, q, r) >= -1e-9)
    }

    #[test]
    fn quads_upper_and_lower() {
        let (a, b) = (left_quad(1.0), right_quad(1.0));
        assert_eq!(upper_tangent(&a, &b, 4.0, f64::EPSILON).unwrap(), (1, 1));
        assert_eq!(lower_tangent(&a, &b, 4.0, f64::EPSILON).unwrap(), (3, 3));
    }

    #[test]
    fn widely_spaced_x_uses_the_coordinate_divider() {
        let (a, b) = (left_quad(100.0), right_quad(100.0));
        let mut all = a.clone();
        all.extend_from_slice(&b);
        let (ui, uj) = upper_tangent(&a, &b, 400.0, f64::EPSILON).unwrap();
        let (li, lj) = lower_tangent(&a, &b, 400.0, f64::EPSILON).unwrap();
        assert!(all_below(a[ui], b[uj], &all));
        assert!(all_above(a[li], b[lj], &all));
        assert_eq!((ui, uj), (1, 1));
        assert_eq!((li, lj), (3, 3));
        // The split index (4 of 8 points) is not a separating coordinate here.
        assert!(matches!(
            upper_tangent(&a, &b, 4.0, f64::EPSILON),
            Err(HullError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn single_points_and_segments() {
        let a = vec![vector![0.0, 0.0]];
        let b = vec![vector![2.0, -1.0], vector![3.0, 5.0]];
        assert_eq!(upper_tangent(&a, &b, 1.0, f64::EPSILON).unwrap(), (0, 1));
        assert_eq!(lower_tangent(&a, &b, 1.0, f64::EPSILON).unwrap(), (0, 0));
    }

    #[test]
    fn collinear_chain_reaches_the_far_ends() {
        let a = vec![vector![0.0, 0.0], vector![1.0, 1.0]];
        let b = vec![vector![2.0, 2.0], vector![3.0, 3.0]];
        let eps = f64::EPSILON;
        assert_eq!(upper_tangent(&a, &b, 1.5, eps).unwrap(), (0, 1));
        assert_eq!(lower_tangent(&a, &b, 1.5, eps).unwrap(), (0, 1));
    }

    #[test]
    fn empty_hull_is_degenerate() {
        let b = vec![vector![2.0, 2.0]];
        assert!(upper_tangent(&[], &b, 1.0, 0.0).is_err());
        assert!(lower_tangent(&b, &[], 3.0, 0.0).is_err());
    }
}
