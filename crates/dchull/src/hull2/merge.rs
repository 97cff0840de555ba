//! Merge two x-separated sub-hulls into one.
//!
//! The merged cycle is the chain of `b` from its upper-tangent vertex clockwise to its
//! lower-tangent vertex, followed by the chain of `a` from its lower-tangent vertex
//! clockwise to its upper-tangent vertex. That is the part of `a` not hidden by `b`
//! (walking `a` backward from upper to lower visits the same vertices) and it keeps the
//! cycle clockwise without re-sorting. Output starts at its leftmost vertex.

use nalgebra::Vector2;

use super::error::HullError;
use super::predicates::lex_cmp;
use super::tangent::{lower_tangent, upper_tangent};
use super::validate::is_clockwise_eps;

/// Merge clockwise hulls `a` (left of `divider`) and `b` (right of it).
///
/// Both children are consumed. An empty child yields the other one unchanged.
pub fn merge_hulls(
    a: Vec<Vector2<f64>>,
    b: Vec<Vector2<f64>>,
    divider: f64,
    eps: f64,
) -> Result<Vec<Vector2<f64>>, HullError> {
    if a.is_empty() {
        return Ok(b);
    }
    if b.is_empty() {
        return Ok(a);
    }
    let upper = upper_tangent(&a, &b, divider, eps)?;
    let lower = lower_tangent(&a, &b, divider, eps)?;
    tracing::trace!(
        left = a.len(),
        right = b.len(),
        divider,
        ?upper,
        ?lower,
        "merge"
    );
    let merged = stitch(a, b, upper, lower);
    debug_assert!(
        is_clockwise_eps(&merged, 1e-6),
        "merged hull turns counter-clockwise: {merged:?}"
    );
    Ok(merged)
}

/// Join the visible chains given tangent endpoints `upper = (i, j)` and `lower = (i, j)`.
///
/// # Panics
/// If a tangent index is out of range for its hull.
pub fn stitch(
    a: Vec<Vector2<f64>>,
    b: Vec<Vector2<f64>>,
    upper: (usize, usize),
    lower: (usize, usize),
) -> Vec<Vector2<f64>> {
    let (upper_left, upper_right) = upper;
    let (lower_left, lower_right) = lower;
    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut j = upper_right;
    loop {
        out.push(b[j]);
        if j == lower_right {
            break;
        }
        j = (j + 1) % b.len();
    }
    let mut i = lower_left;
    loop {
        out.push(a[i]);
        if i == upper_left {
            break;
        }
        i = (i + 1) % a.len();
    }
    rotate_to_leftmost(&mut out);
    out
}

/// Rotate a cycle so that its lexicographically smallest vertex comes first.
pub(crate) fn rotate_to_leftmost(cycle: &mut [Vector2<f64>]) {
    if let Some((k, _)) = cycle
        .iter()
        .enumerate()
        .min_by(|(_, p), (_, q)| lex_cmp(p, q))
    {
        cycle.rotate_left(k);
    }
}
