use serde::Deserialize;

use super::Point;

/// On-disk layout of one recorded gesture
///
/// Only `points` is read; anything else the recorder writes is ignored.
#[derive(Deserialize, Clone, Debug)]
pub struct GestureRecord {
    pub points: Vec<Point>,
}

impl GestureRecord {
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}
