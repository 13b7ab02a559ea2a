//! Arc-length resampling
//!
//! Places `count` points along the recorded polyline so that consecutive
//! output points are the same path distance apart, independent of how
//! densely the recorder sampled each part of the stroke.

use crate::error::{GestureError, Result};
use crate::types::Point;

/// Resample a stroke to exactly `count` points evenly spaced by path distance.
///
/// Degenerate inputs never fail:
/// * no points gives `count` origins,
/// * a single point, or a stroke whose points all coincide, gives `count`
///   copies of the first point.
///
/// A path length that overflows to infinity (or is NaN) is rejected.
pub fn resample_by_arc_length(points: &[Point], count: usize) -> Result<Vec<Point>> {
    if count == 0 {
        return Err(GestureError::invalid_argument("resample count must be positive"));
    }

    let first = match points.first() {
        Some(p) => *p,
        None => return Ok(vec![Point::ORIGIN; count]),
    };
    if points.len() == 1 {
        return Ok(vec![first; count]);
    }

    let cumulative = cumulative_distances(points);
    let total = cumulative[cumulative.len() - 1];
    if !total.is_finite() {
        return Err(GestureError::invalid_argument(format!(
            "stroke path length is not finite ({})",
            total
        )));
    }
    if total <= 0.0 {
        return Ok(vec![first; count]);
    }

    let mut resampled = Vec::with_capacity(count);
    let mut segment = 0;
    let last_segment = points.len() - 2;

    for i in 0..count {
        let target = target_distance(i, count, total);

        // targets only grow, so the segment cursor never moves backwards
        while segment < last_segment && cumulative[segment + 1] < target {
            segment += 1;
        }

        let start = cumulative[segment];
        let length = cumulative[segment + 1] - start;
        let t = if length > 0.0 {
            ((target - start) / length).clamp(0.0, 1.0)
        } else {
            0.0
        };

        resampled.push(points[segment].lerp(&points[segment + 1], t));
    }

    Ok(resampled)
}

/// Running path length at every sample, starting at 0.
pub fn cumulative_distances(points: &[Point]) -> Vec<f64> {
    let mut cumulative = Vec::with_capacity(points.len());
    let mut travelled = 0.0;
    cumulative.push(travelled);

    for pair in points.windows(2) {
        travelled += pair[0].distance_to(&pair[1]);
        cumulative.push(travelled);
    }

    cumulative
}

/// `i`-th of `count` values evenly spaced over [0, total], endpoints included
fn target_distance(i: usize, count: usize, total: f64) -> f64 {
    if count == 1 {
        return 0.0;
    }
    if i == count - 1 {
        return total;
    }
    total * i as f64 / (count - 1) as f64
}
