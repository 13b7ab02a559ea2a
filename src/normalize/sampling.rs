use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{GestureError, Result};
use crate::types::Point;

/// Bring a stroke to exactly `target` points.
///
/// Longer strokes are thinned at evenly spaced indices, always keeping the
/// first and last sample. Shorter strokes keep every sample and are padded
/// with samples drawn uniformly, with replacement, from the stroke itself.
pub fn sample_fixed_with_rng<R: Rng + ?Sized>(
    points: &[Point],
    target: usize,
    rng: &mut R,
) -> Result<Vec<Point>> {
    if points.is_empty() {
        return Err(GestureError::invalid_argument("cannot sample from an empty point list"));
    }
    if target == 0 {
        return Err(GestureError::invalid_argument("sample count must be positive"));
    }

    let len = points.len();
    if len > target {
        return Ok(downsample_indices(len, target).map(|i| points[i]).collect());
    }

    let mut sampled = points.to_vec();
    if len < target {
        sampled.reserve(target - len);
        for _ in len..target {
            sampled.push(points[rng.random_range(0..len)]);
        }
    }
    Ok(sampled)
}

/// Convenience wrapper owning its RNG: seeded when `seed` is given, OS-seeded otherwise.
pub fn sample_fixed(points: &[Point], target: usize, seed: Option<u64>) -> Result<Vec<Point>> {
    let mut rng = seeded_rng(seed);
    sample_fixed_with_rng(points, target, &mut rng)
}

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Evenly spaced positions over [0, len - 1], truncated to integers
fn downsample_indices(len: usize, target: usize) -> impl Iterator<Item = usize> {
    let last = len - 1;
    let step = if target > 1 {
        last as f64 / (target - 1) as f64
    } else {
        0.0
    };

    (0..target).map(move |i| {
        if target > 1 && i == target - 1 {
            last
        } else {
            ((i as f64 * step) as usize).min(last)
        }
    })
}
