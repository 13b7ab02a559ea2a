use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use crate::error::{GestureError, Result};
use crate::types::{GestureRecord, Point};

/// Load one gesture recording into its ordered point sequence.
///
/// The file is closed as soon as parsing finishes, whether or not it succeeded.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| GestureError::io(path, e))?;

    let record: GestureRecord = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| GestureError::from_json(path, e))?;

    debug!("Loaded {} points from {}", record.points.len(), path.display());
    Ok(record.into_points())
}

/// Same as [`load_points`] for a document already in memory
pub fn parse_points(source: &str) -> Result<Vec<Point>> {
    serde_json::from_str::<GestureRecord>(source)
        .map(GestureRecord::into_points)
        .map_err(|e| GestureError::from_json("<memory>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn keeps_recording_order() {
        let points = parse_points(
            r#"{"points": [
                {"x": 1.0, "y": 2.0, "z": 3.0},
                {"x": -1, "y": 0.5, "z": 7}
            ]}"#,
        )
        .unwrap();

        assert_eq!(points, vec![Point::new(1.0, 2.0, 3.0), Point::new(-1.0, 0.5, 7.0)]);
    }

    #[test]
    fn ignores_extra_fields() {
        let points = parse_points(
            r#"{"name": "swipe", "points": [{"x": 1, "y": 2, "z": 3, "timestamp": 99}]}"#,
        )
        .unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn empty_collection_is_not_an_error() {
        assert!(parse_points(r#"{"points": []}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_points(r#"{"points": [ {"x": 1, "#).unwrap_err();
        assert!(matches!(err, GestureError::Parse { .. }), "got {err:?}");

        let err = parse_points("not json at all").unwrap_err();
        assert!(matches!(err, GestureError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn missing_axis_is_schema_error() {
        let err = parse_points(r#"{"points": [{"x": 1, "y": 2}]}"#).unwrap_err();
        assert!(matches!(err, GestureError::Schema { .. }), "got {err:?}");
    }

    #[test]
    fn non_numeric_axis_is_schema_error() {
        let err = parse_points(r#"{"points": [{"x": "1", "y": 2, "z": 3}]}"#).unwrap_err();
        assert!(matches!(err, GestureError::Schema { .. }), "got {err:?}");
    }

    #[test]
    fn missing_points_field_is_schema_error() {
        let err = parse_points(r#"{"samples": []}"#).unwrap_err();
        assert!(matches!(err, GestureError::Schema { .. }), "got {err:?}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_points(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, GestureError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"points": [{{"x": 0.25, "y": 0, "z": -3}}]}}"#).unwrap();

        let points = load_points(file.path()).unwrap();
        assert_eq!(points, vec![Point::new(0.25, 0.0, -3.0)]);
    }
}
