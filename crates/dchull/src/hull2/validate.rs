//! Hull checks shared by `Hull2`, tests and the CLI `--check` flag.
//!
//! `eps` follows the predicate convention: relative to the coordinate scale, so one
//! value works for inputs in `[-1e-6, 1e-6]²` and `[-1e6, 1e6]²` alike.

use nalgebra::Vector2;

use super::predicates::{is_collinear, lex_cmp, orientation, within_segment, Orientation};

/// `p` lies on or inside the clockwise cycle `verts`, with slack `eps` on the orientation test.
///
/// Degenerate cycles: a single vertex contains only points within `eps` times the
/// coordinate magnitude, a segment contains its collinear interior.
pub fn contains_eps(verts: &[Vector2<f64>], p: Vector2<f64>, eps: f64) -> bool {
    match verts.len() {
        0 => false,
        1 => (verts[0] - p).norm() <= eps * verts[0].amax().max(p.amax()),
        2 => is_collinear(verts[0], verts[1], p, eps) && within_segment(verts[0], verts[1], p),
        n => (0..n).all(|k| {
            orientation(verts[k], verts[(k + 1) % n], p, eps) != Orientation::CounterClockwise
        }),
    }
}

/// No consecutive triple (wrapping) turns counter-clockwise beyond `eps`.
pub fn is_clockwise_eps(verts: &[Vector2<f64>], eps: f64) -> bool {
    let n = verts.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|k| {
        orientation(verts[k], verts[(k + 1) % n], verts[(k + 2) % n], eps)
            != Orientation::CounterClockwise
    })
}

/// Same vertex set (exact coordinates), independent of order and starting rotation.
pub fn same_vertex_set(a: &[Vector2<f64>], b: &[Vector2<f64>]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut sa = a.to_vec();
    let mut sb = b.to_vec();
    sa.sort_by(lex_cmp);
    sb.sort_by(lex_cmp);
    sa == sb
}

/// Any exact duplicate among `points`.
pub fn has_duplicates(points: &[Vector2<f64>]) -> bool {
    let mut s = points.to_vec();
    s.sort_by(lex_cmp);
    s.windows(2).any(|w| w[0] == w[1])
}

/// First input index that falls outside `hull` (with slack `eps`), if any.
pub fn first_outside(
    hull: &[Vector2<f64>],
    points: &[Vector2<f64>],
    eps: f64,
) -> Option<usize> {
    points.iter().position(|&p| !contains_eps(hull, p, eps))
}
