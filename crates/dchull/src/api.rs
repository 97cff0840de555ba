//! Curated API surface.
//!
//! - Entry points and configuration first, then the building blocks for callers that
//!   want to drive the pipeline themselves (tests, benches, experiments).

// Entry points
pub use crate::hull2::{compute_hull, compute_hull_with, Hull2, HullCfg, HullError};
// Building blocks
pub use crate::hull2::{
    area_scale, brute_force_hull, centroid, clockwise_sort, crossing_height, is_clockwise,
    is_collinear, is_counter_clockwise, lower_tangent, merge_hulls, orientation, signed_area,
    stitch, upper_tangent, Orientation,
};
// Checks
pub use crate::hull2::validate::{
    contains_eps, first_outside, has_duplicates, is_clockwise_eps, same_vertex_set,
};
// Random inputs
pub use crate::hull2::rand::{
    draw_points, PointDist, ReplayToken as PointsReplay, SampleCfg,
};
