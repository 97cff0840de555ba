//! Planar convex hulls by divide and conquer.
//!
//! Layout
//! - `hull2`: predicates, centroid ordering, brute-force base case, tangent search,
//!   merge, and the recursive driver.
//! - `api`: curated re-exports for callers (CLI, benches).
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; y axis up; hulls are clockwise.
//! - Every tolerance is an explicit value (`HullCfg::eps`), never a global.

pub mod api;
pub mod hull2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull2::{brute_force_hull, compute_hull, compute_hull_with, Hull2, HullCfg, HullError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull2::rand::{draw_points, PointDist, ReplayToken, SampleCfg};
    pub use crate::hull2::{
        brute_force_hull, compute_hull, compute_hull_with, Hull2, HullCfg, HullError,
        Orientation,
    };
    pub use nalgebra::Vector2 as Vec2;
}
