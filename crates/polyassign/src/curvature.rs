//! Total turning of a closed 3D polyline, in full turns.
//!
//! Not used by the assignment pipeline.

use nalgebra::Vector3;

/// Sum of the angles between consecutive segments of the closed loop `points`
/// (cyclic indexing), divided by 2π. A planar convex loop gives 1.0.
///
/// Returns `None` for fewer than three points or a zero-length segment.
pub fn absolute_curvature(points: &[Vector3<f64>]) -> Option<f64> {
    let n = points.len();
    if n < 3 {
        return None;
    }
    let mut total = 0.0;
    for i in 0..n {
        let a = points[(i + 1) % n] - points[i];
        let b = points[(i + 2) % n] - points[(i + 1) % n];
        total += turning_angle(&a, &b)?.abs();
    }
    Some(total / std::f64::consts::TAU)
}

fn turning_angle(a: &Vector3<f64>, b: &Vector3<f64>) -> Option<f64> {
    let denom = a.norm() * b.norm();
    if denom <= 0.0 || !denom.is_finite() {
        return None;
    }
    // clamp guards acos against rounding just outside [-1, 1]
    Some((a.dot(b) / denom).clamp(-1.0, 1.0).acos())
}
