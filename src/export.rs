use std::fmt::Write;

use crate::types::Point;
use crate::utils::format_float;

/// Render points as a Unity C# `List<Vector3>` initializer.
///
/// Floats are printed the way Python prints them (`1e-05`, `3.0`), so the
/// output matches the existing export script byte for byte.
///
/// ```text
/// new List<Vector3>
/// {
///     new Vector3(0.0f, 0.0f, 0.0f),
///     new Vector3(1.5f, 2.0f, -0.25f)
/// };
/// ```
pub fn to_unity_vector3_list(points: &[Point]) -> String {
    let mut result = String::from("new List<Vector3>\n{\n");

    for (i, point) in points.iter().enumerate() {
        // writing into a String cannot fail
        let _ = write!(
            result,
            "    new Vector3({}f, {}f, {}f)",
            format_float(point.x),
            format_float(point.y),
            format_float(point.z)
        );
        if i + 1 < points.len() {
            result.push(',');
        }
        result.push('\n');
    }

    result.push_str("};");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_byte_exact_list() {
        let points = vec![Point::new(0.0, 0.0, 0.0), Point::new(1.5, 2.0, -0.25)];
        assert_eq!(
            to_unity_vector3_list(&points),
            "new List<Vector3>\n{\n    new Vector3(0.0f, 0.0f, 0.0f),\n    new Vector3(1.5f, 2.0f, -0.25f)\n};"
        );
    }

    #[test]
    fn single_entry_has_no_trailing_comma() {
        let out = to_unity_vector3_list(&[Point::new(3.0, 4.0, 5.0)]);
        assert_eq!(out, "new List<Vector3>\n{\n    new Vector3(3.0f, 4.0f, 5.0f)\n};");
    }

    #[test]
    fn empty_list() {
        assert_eq!(to_unity_vector3_list(&[]), "new List<Vector3>\n{\n};");
    }

    #[test]
    fn small_and_large_values_use_python_exponents() {
        let out = to_unity_vector3_list(&[Point::new(1e-5, 1e16, -1.5e-7)]);
        assert_eq!(out, "new List<Vector3>\n{\n    new Vector3(1e-05f, 1e+16f, -1.5e-07f)\n};");
    }
}
