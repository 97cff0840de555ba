//! Basic types for the 2D hull pipeline.
//!
//! - `HullCfg`: explicit tolerance and recursion knobs, threaded through every call.
//! - `Hull2`: immutable clockwise vertex cycle returned by the driver.
//!
//! Conventions
//! - y axis points up; "clockwise" means negative signed area for consecutive triples.
//! - No closing vertex is repeated at the end of the cycle.

use nalgebra::Vector2;

use super::validate;

/// Hull configuration (tolerance and recursion cutoffs).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Relative orientation tolerance: `|signed_area| <= eps * area_scale` is collinear.
    /// The default `f64::EPSILON` absorbs rounding in the inputs and the predicate.
    pub eps: f64,
    /// Sub-problems with fewer points than this go to the cubic base case.
    pub brute_force_threshold: usize,
    /// Fork both halves with `rayon::join` once a sub-problem has at least this many points.
    /// `None` keeps the recursion single-threaded.
    pub parallel_cutoff: Option<usize>,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps: f64::EPSILON,
            brute_force_threshold: 10,
            parallel_cutoff: None,
        }
    }
}

impl HullCfg {
    #[inline]
    pub fn with_eps(self, eps: f64) -> Self {
        Self { eps, ..self }
    }
    #[inline]
    pub fn with_threshold(self, brute_force_threshold: usize) -> Self {
        Self {
            brute_force_threshold,
            ..self
        }
    }
    #[inline]
    pub fn with_parallel_cutoff(self, cutoff: usize) -> Self {
        Self {
            parallel_cutoff: Some(cutoff),
            ..self
        }
    }
}

/// Convex hull as a clockwise vertex cycle.
///
/// Invariants:
/// - No duplicate vertices.
/// - Every vertex is an extreme point (no collinear interior vertices).
/// - Clockwise order; degenerate hulls carry 0, 1 or 2 vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull2 {
    verts: Vec<Vector2<f64>>,
}

impl Hull2 {
    #[inline]
    pub(crate) fn from_ordered(verts: Vec<Vector2<f64>>) -> Self {
        Self { verts }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Vector2<f64>> {
        self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// True for fewer than three vertices (point, segment or empty).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.verts.len() < 3
    }

    /// Membership with relative slack `eps` on the orientation test.
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        validate::contains_eps(&self.verts, p, eps)
    }

    /// No consecutive triple (wrapping) turns counter-clockwise beyond `eps`.
    #[inline]
    pub fn is_clockwise_eps(&self, eps: f64) -> bool {
        validate::is_clockwise_eps(&self.verts, eps)
    }

    /// Same vertex set, independent of the starting rotation.
    #[inline]
    pub fn same_vertex_set(&self, other: &[Vector2<f64>]) -> bool {
        validate::same_vertex_set(&self.verts, other)
    }

    /// Shoelace area; positive for clockwise cycles.
    pub fn area(&self) -> f64 {
        let n = self.verts.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for k in 0..n {
            let p = self.verts[k];
            let q = self.verts[(k + 1) % n];
            twice += p.x * q.y - q.x * p.y;
        }
        -0.5 * twice
    }
}

impl AsRef<[Vector2<f64>]> for Hull2 {
    fn as_ref(&self) -> &[Vector2<f64>] {
        &self.verts
    }
}
