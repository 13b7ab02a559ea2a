use crate::error::{GestureError, Result};
use crate::types::Point;

/// Translate the stroke so that its first sample sits at (0, 0, 0).
pub fn shift_to_origin(points: &[Point]) -> Result<Vec<Point>> {
    let origin = *points
        .first()
        .ok_or_else(|| GestureError::invalid_argument("cannot shift an empty sequence to origin"))?;

    Ok(points.iter().map(|p| *p - origin).collect())
}
