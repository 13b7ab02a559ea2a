//! Point-sequence normalization
//!
//! Independent transforms live in their own modules; [`Normalizer`] chains
//! them the way the dataset builder and the exporter need.

pub mod origin;
pub mod resample;
pub mod sampling;
pub mod centroid;

pub use origin::shift_to_origin;
pub use resample::{cumulative_distances, resample_by_arc_length};
pub use sampling::{sample_fixed, sample_fixed_with_rng, seeded_rng};
pub use centroid::{centroid, sort_by_centroid_distance};

use log::debug;
use rand::rngs::StdRng;

use crate::config::{NormalizeConfig, NormalizeMode};
use crate::error::{GestureError, Result};
use crate::types::Point;

/// Origin shift followed by the configured transform
pub struct Normalizer {
    config: NormalizeConfig,
    rng: StdRng,
}

impl Normalizer {
    pub fn new(config: NormalizeConfig) -> Result<Self> {
        if config.target_points == 0 && config.mode != NormalizeMode::CentroidSort {
            return Err(GestureError::invalid_argument("target_points must be positive"));
        }

        let rng = seeded_rng(config.seed);
        Ok(Self { config, rng })
    }

    pub fn apply(&mut self, points: &[Point]) -> Result<Vec<Point>> {
        let shifted;
        let input = if self.config.origin_shift && !points.is_empty() {
            shifted = shift_to_origin(points)?;
            shifted.as_slice()
        } else {
            points
        };

        let output = match self.config.mode {
            NormalizeMode::Resample => resample_by_arc_length(input, self.config.target_points)?,
            NormalizeMode::FixedSize => {
                sample_fixed_with_rng(input, self.config.target_points, &mut self.rng)?
            }
            NormalizeMode::CentroidSort => sort_by_centroid_distance(input)?,
        };
        ensure_finite(&output)?;

        debug!(
            "Normalized {} -> {} points ({:?})",
            points.len(),
            output.len(),
            self.config.mode
        );
        Ok(output)
    }
}

/// Reject sequences a numeric bundle cannot carry
pub fn ensure_finite(points: &[Point]) -> Result<()> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(GestureError::invalid_argument(format!(
            "non-finite coordinate at point {}: {:?}",
            index, points[index]
        ))),
        None => Ok(()),
    }
}
