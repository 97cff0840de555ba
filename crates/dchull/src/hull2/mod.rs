//! Planar convex hulls by divide and conquer.
//!
//! Purpose
//! - Compute the convex hull of a finite point set in O(n log n): sort by x, split,
//!   recurse, and merge neighbouring sub-hulls across their common tangents.
//! - Keep the numerics explicit: one relative tolerance `eps` (from `HullCfg`) decides
//!   collinearity everywhere; nothing reads a global.
//!
//! Pipeline
//! - `predicates`: signed area, orientation, `crossing_height` at a vertical divider.
//! - `order`: centroid-relative clockwise ordering.
//! - `brute`: cubic base case (also the reference for cross-validation).
//! - `tangent`: upper/lower common tangents by rotating fingers.
//! - `merge`: stitch two sub-hulls along their tangents.
//! - `driver`: `compute_hull`, `compute_hull_with`.
//!
//! Conventions
//! - y axis up; hulls are clockwise cycles with no repeated closing vertex.
//! - Collinear runs keep only their extreme endpoints.

pub mod brute;
mod driver;
mod error;
pub mod merge;
pub mod order;
pub mod predicates;
pub mod rand;
pub mod tangent;
mod types;
pub mod validate;

pub use brute::brute_force_hull;
pub use driver::{compute_hull, compute_hull_with};
pub use error::HullError;
pub use merge::{merge_hulls, stitch};
pub use order::{centroid, clockwise_sort};
pub use predicates::{
    area_scale, crossing_height, is_clockwise, is_collinear, is_counter_clockwise, orientation,
    signed_area, Orientation, COLLINEAR_SLACK,
};
pub use tangent::{lower_tangent, upper_tangent};
pub use types::{Hull2, HullCfg};
