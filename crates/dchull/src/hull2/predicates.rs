//! Orientation predicates and the vertical-line intersection used by the tangent search.
//!
//! Tolerance convention (symmetric, scale-aware)
//! - `eps` is relative: a triple is collinear when the point opposite the longest side
//!   lies within `COLLINEAR_SLACK * eps * (L + 2m)` of that side, where `L` is the
//!   longest side and `m` the largest coordinate magnitude of the three points.
//!   Equivalently `|signed_area| <= eps * area_scale(a, b, c)`.
//! - The `m` term absorbs the representation error of the inputs themselves, so points
//!   such as `(0.1k, 0.3k + 0.7)` count as collinear at `eps = f64::EPSILON`, at any
//!   coordinate scale.
//! - Otherwise the sign decides. `eps` is always an explicit argument; callers take it
//!   from `HullCfg::eps`.

use nalgebra::Vector2;

use super::error::HullError;

/// Turn direction of an ordered triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Rounding headroom of the collinearity test, in units of `eps`.
pub const COLLINEAR_SLACK: f64 = 4.0;

/// Signed area of the triangle `a, b, c`.
///
/// Positive for a counter-clockwise turn, negative for clockwise, zero when collinear.
/// Computed from the edge vectors `b - a` and `c - a`.
#[inline]
pub fn signed_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    0.5 * (b - a).perp(&(c - a))
}

/// Area below which `a, b, c` count as collinear, per unit of `eps`.
///
/// Symmetric in its arguments.
#[inline]
pub fn area_scale(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let longest = (b - a).norm().max((c - b).norm()).max((a - c).norm());
    let m = a.amax().max(b.amax()).max(c.amax());
    0.5 * COLLINEAR_SLACK * longest * (longest + 2.0 * m)
}

#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> Orientation {
    let area = signed_area(a, b, c);
    if area.abs() <= eps * area_scale(a, b, c) {
        Orientation::Collinear
    } else if area < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

#[inline]
pub fn is_clockwise(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> bool {
    orientation(a, b, c, eps) == Orientation::Clockwise
}

#[inline]
pub fn is_counter_clockwise(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> bool {
    orientation(a, b, c, eps) == Orientation::CounterClockwise
}

#[inline]
pub fn is_collinear(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> bool {
    orientation(a, b, c, eps) == Orientation::Collinear
}

/// Intersection of the line through `p1, p2` with the vertical line at `x`.
///
/// The vertical line is anchored at `(x, y_hi)` and `(x, y_lo)`; any two distinct
/// heights give the same point. Uses the general two-line formula:
///
/// ```text
/// d  = (x1 - x2)(y3 - y4) - (y1 - y2)(x3 - x4)
/// px = ((x1 y2 - y1 x2)(x3 - x4) - (x1 - x2)(x3 y4 - y3 x4)) / d
/// py = ((x1 y2 - y1 x2)(y3 - y4) - (y1 - y2)(x3 y4 - y3 x4)) / d
/// ```
///
/// Errors with `DegenerateGeometry` when `d == 0` (vertical `p1 p2` or `y_hi == y_lo`)
/// or when the result is not finite.
pub fn crossing_height(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    x: f64,
    y_hi: f64,
    y_lo: f64,
) -> Result<Vector2<f64>, HullError> {
    let (x1, y1) = (p1.x, p1.y);
    let (x2, y2) = (p2.x, p2.y);
    let (x3, y3, x4, y4) = (x, y_hi, x, y_lo);
    let d = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if d == 0.0 || !d.is_finite() {
        return Err(HullError::DegenerateGeometry {
            what: "line is parallel to the vertical divider",
        });
    }
    let c12 = x1 * y2 - y1 * x2;
    let c34 = x3 * y4 - y3 * x4;
    let px = (c12 * (x3 - x4) - (x1 - x2) * c34) / d;
    let py = (c12 * (y3 - y4) - (y1 - y2) * c34) / d;
    if !(px.is_finite() && py.is_finite()) {
        return Err(HullError::DegenerateGeometry {
            what: "intersection with the divider is not finite",
        });
    }
    Ok(Vector2::new(px, py))
}

/// Lexicographic (x, then y) order used for sorting and for "leftmost"/"rightmost".
///
/// `-0.0` and `0.0` compare equal so that sorting agrees with `==` when deduplicating.
#[inline]
pub(crate) fn lex_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// `r` lies in the closed segment `[p, q]`, assuming it is already known to be collinear.
#[inline]
pub(crate) fn within_segment(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> bool {
    let pq = q - p;
    let t = (r - p).dot(&pq);
    t >= 0.0 && t <= pq.dot(&pq)
}
