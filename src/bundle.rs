use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::{BundleFormat, NormalizeConfig, NormalizeMode};
use crate::error::{GestureError, Result};
use crate::normalize::ensure_finite;
use crate::types::{Dataset, Point};

/// On-disk layout of a dataset bundle.
///
/// `X`, `y` and `class_to_label` are what the trainer reads; the rest is
/// provenance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BundleDocument {
    #[serde(rename = "X")]
    pub x: Vec<Vec<[f64; 3]>>,
    pub y: Vec<usize>,
    pub class_to_label: BTreeMap<String, usize>,
    pub created_at: String,
    pub mode: NormalizeMode,
    pub target_points: usize,
}

impl BundleDocument {
    pub fn new(dataset: &Dataset, normalize: &NormalizeConfig) -> Self {
        Self {
            x: dataset
                .sequences
                .iter()
                .map(|seq| seq.iter().map(|p| p.to_array()).collect())
                .collect(),
            y: dataset.labels.clone(),
            class_to_label: dataset.class_to_label.clone(),
            created_at: Local::now().to_rfc3339(),
            mode: normalize.mode,
            target_points: normalize.target_points,
        }
    }

    /// Rebuild the in-memory dataset, dropping provenance
    pub fn into_dataset(self) -> Dataset {
        Dataset {
            sequences: self
                .x
                .into_iter()
                .map(|seq| seq.into_iter().map(|[x, y, z]| Point::new(x, y, z)).collect())
                .collect(),
            labels: self.y,
            class_to_label: self.class_to_label,
        }
    }
}

/// Persist `dataset` at `path` in the requested format, creating parent folders.
///
/// Non-finite coordinates are rejected before anything touches the disk;
/// JSON would otherwise carry them as `null`.
pub fn write_bundle(
    dataset: &Dataset,
    normalize: &NormalizeConfig,
    path: &Path,
    format: BundleFormat,
) -> Result<()> {
    for (sample, (sequence, _)) in dataset.iter().enumerate() {
        ensure_finite(sequence).map_err(|e| match e {
            GestureError::InvalidArgument(message) => GestureError::InvalidArgument(format!(
                "{} (sample {}): {}",
                path.display(),
                sample,
                message
            )),
            other => other,
        })?;
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GestureError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| GestureError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    match format {
        BundleFormat::Json => {
            let document = BundleDocument::new(dataset, normalize);
            serde_json::to_writer(&mut writer, &document)
                .map_err(|e| GestureError::from_json(path, e))?;
        }
        BundleFormat::Csv => write_csv(dataset, &mut writer).map_err(|e| GestureError::io(path, e))?,
    }
    writer.flush().map_err(|e| GestureError::io(path, e))?;

    info!(
        "Saved dataset to {} ({} gestures, {:?})",
        path.display(),
        dataset.len(),
        format
    );
    Ok(())
}

/// Read a JSON bundle back
pub fn read_bundle(path: &Path) -> Result<BundleDocument> {
    let file = File::open(path).map_err(|e| GestureError::io(path, e))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .map_err(|e| GestureError::from_json(path, e))
}

/// One row per point: `sample,label,class,index,x,y,z`
fn write_csv<W: Write>(dataset: &Dataset, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "sample,label,class,index,x,y,z")?;

    for (sample, (sequence, label)) in dataset.iter().enumerate() {
        let class = dataset.class_name(label).unwrap_or("");
        for (index, point) in sequence.iter().enumerate() {
            writeln!(
                out,
                "{},{},{},{},{},{},{}",
                sample, label, class, index, point.x, point.y, point.z
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dataset() -> Dataset {
        let mut dataset = Dataset::new();
        let swipe = dataset.register_class("swipe");
        let tap = dataset.register_class("tap");
        dataset.push(vec![Point::ORIGIN, Point::new(1.5, 0.0, -2.0)], swipe);
        dataset.push(vec![Point::new(0.0, 3.0, 0.0)], tap);
        dataset
    }

    #[test]
    fn json_bundle_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/gestures.json");
        let dataset = small_dataset();

        write_bundle(&dataset, &NormalizeConfig::default(), &path, BundleFormat::Json).unwrap();

        let document = read_bundle(&path).unwrap();
        assert_eq!(document.y, vec![0, 1]);
        assert_eq!(document.x[0][1], [1.5, 0.0, -2.0]);
        assert_eq!(document.target_points, 128);
        assert_eq!(document.into_dataset(), dataset);
    }

    #[test]
    fn json_bundle_uses_trainer_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gestures.json");
        write_bundle(&small_dataset(), &NormalizeConfig::default(), &path, BundleFormat::Json).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(raw.get("X").is_some());
        assert_eq!(raw["y"], serde_json::json!([0, 1]));
        assert_eq!(raw["class_to_label"], serde_json::json!({"swipe": 0, "tap": 1}));
        assert_eq!(raw["mode"], "fixed_size");
    }

    #[test]
    fn csv_bundle_has_one_row_per_point() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gestures.csv");
        write_bundle(&small_dataset(), &NormalizeConfig::default(), &path, BundleFormat::Csv).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "sample,label,class,index,x,y,z",
                "0,0,swipe,0,0,0,0",
                "0,0,swipe,1,1.5,0,-2",
                "1,1,tap,0,0,3,0",
            ]
        );
    }

    #[test]
    fn non_finite_dataset_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gestures.json");
        let mut dataset = small_dataset();
        dataset.push(vec![Point::ORIGIN, Point::new(f64::NEG_INFINITY, 0.0, 0.0)], 0);

        let err = write_bundle(&dataset, &NormalizeConfig::default(), &path, BundleFormat::Json)
            .unwrap_err();
        assert!(matches!(err, GestureError::InvalidArgument(_)), "got {err:?}");
        assert!(!path.exists());
    }
}
