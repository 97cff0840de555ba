//! Centroid-relative ordering: turn an unordered vertex set into a clockwise cycle.

use std::f64::consts::TAU;

use nalgebra::Vector2;

/// Vertex mean; `None` for an empty slice.
pub fn centroid(points: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vector2::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

#[inline]
fn angle_from(c: Vector2<f64>, p: Vector2<f64>) -> f64 {
    let th = (p.y - c.y).atan2(p.x - c.x);
    if th < 0.0 {
        th + TAU
    } else {
        th
    }
}

/// Sort by angle around the centroid in descending order (clockwise for y-up).
///
/// Returns a new vector; ties fall back to the squared distance from the centroid.
/// For a convex vertex set the result is its clockwise boundary cycle.
pub fn clockwise_sort(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let Some(c) = centroid(points) else {
        return Vec::new();
    };
    let mut keyed: Vec<(f64, f64, Vector2<f64>)> = points
        .iter()
        .map(|&p| (angle_from(c, p), (p - c).norm_squared(), p))
        .collect();
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.total_cmp(&b.1)));
    keyed.into_iter().map(|(_, _, p)| p).collect()
}
