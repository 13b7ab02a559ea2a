use crate::error::{GestureError, Result};
use crate::types::Point;

/// Per-axis mean of the stroke
pub fn centroid(points: &[Point]) -> Result<Point> {
    if points.is_empty() {
        return Err(GestureError::invalid_argument("centroid of an empty sequence is undefined"));
    }

    let sum = points.iter().fold(Point::ORIGIN, |acc, p| acc + *p);
    let n = points.len() as f64;
    Ok(Point::new(sum.x / n, sum.y / n, sum.z / n))
}

/// Reorder points by ascending distance from the centroid.
///
/// Equidistant points keep their original relative order.
pub fn sort_by_centroid_distance(points: &[Point]) -> Result<Vec<Point>> {
    let center = centroid(points)?;

    let mut keyed: Vec<(f64, Point)> = points
        .iter()
        .map(|p| (p.distance_to(&center), *p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    Ok(keyed.into_iter().map(|(_, p)| p).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_is_axis_mean() {
        let c = centroid(&[Point::new(0.0, 0.0, 0.0), Point::new(2.0, 4.0, -6.0)]).unwrap();
        assert_eq!(c, Point::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn closest_first_with_stable_ties() {
        let points = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(10.0, 0.0, 0.0),
            Point::new(5.0, 0.0, 0.0),
        ];
        let sorted = sort_by_centroid_distance(&points).unwrap();

        assert_eq!(
            sorted,
            vec![
                Point::new(5.0, 0.0, 0.0),
                Point::new(0.0, 0.0, 0.0),
                Point::new(10.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn sorting_twice_changes_nothing() {
        let points = vec![
            Point::new(3.0, 1.0, 0.0),
            Point::new(-2.0, 0.0, 1.0),
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 1.0),
            Point::new(8.0, -4.0, 2.0),
        ];
        let once = sort_by_centroid_distance(&points).unwrap();
        let twice = sort_by_centroid_distance(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn keeps_every_point() {
        let points: Vec<Point> = (0..9).map(|i| Point::new(i as f64, (i % 3) as f64, 0.0)).collect();
        let mut sorted = sort_by_centroid_distance(&points).unwrap();
        assert_eq!(sorted.len(), points.len());

        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
        assert_eq!(sorted, points);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(matches!(
            sort_by_centroid_distance(&[]),
            Err(GestureError::InvalidArgument(_))
        ));
    }
}
