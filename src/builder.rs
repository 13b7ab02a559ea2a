use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::bundle::write_bundle;
use crate::config::{AppConfig, DatasetConfig};
use crate::error::{GestureError, Result};
use crate::loader::load_points;
use crate::normalize::Normalizer;
use crate::types::{ClassSummary, Dataset, DatasetSummary, Point};

/// Walks a folder-per-class tree and normalizes every recording in it
pub struct DatasetBuilder {
    normalizer: Normalizer,
    extension: String,
    skip_invalid: bool,
}

impl DatasetBuilder {
    pub fn new(normalizer: Normalizer, dataset: &DatasetConfig) -> Self {
        Self {
            normalizer,
            extension: dataset.extension.clone(),
            skip_invalid: dataset.skip_invalid,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let normalizer = Normalizer::new(config.normalize.clone())?;
        Ok(Self::new(normalizer, &config.dataset))
    }

    pub fn build<P: AsRef<Path>>(&mut self, root: P) -> Result<(Dataset, DatasetSummary)> {
        let root = root.as_ref();
        info!("Building dataset from {}", root.display());

        let mut dataset = Dataset::new();
        let mut summary = DatasetSummary::default();

        for (class_name, class_path) in class_directories(root)? {
            let label = dataset.register_class(&class_name);
            let mut examples = 0;

            for file_path in self.gesture_files(&class_path)? {
                match self.process_file(&file_path) {
                    Ok(sequence) if sequence.is_empty() => {
                        debug!("Dropping empty sequence from {}", file_path.display());
                    }
                    Ok(sequence) => {
                        dataset.push(sequence, label);
                        examples += 1;
                    }
                    Err(e) if self.skip_invalid => {
                        warn!("Skipping {}: {}", file_path.display(), e);
                        summary.skipped_files += 1;
                    }
                    Err(e) => return Err(e),
                }
            }

            info!("Class '{}' -> label {} ({} examples)", class_name, label, examples);
            summary.classes.push(ClassSummary {
                name: class_name,
                label,
                examples,
            });
        }

        summary.total_examples = dataset.len();
        info!("Classes: {:?}", dataset.class_to_label);
        info!("Total gestures: {}", summary.total_examples);
        if summary.skipped_files > 0 {
            warn!("Skipped {} invalid files", summary.skipped_files);
        }

        Ok((dataset, summary))
    }

    fn process_file(&mut self, path: &Path) -> Result<Vec<Point>> {
        let points = load_points(path)?;
        self.normalizer.apply(&points).map_err(|e| match e {
            GestureError::InvalidArgument(message) => {
                GestureError::InvalidArgument(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    /// Regular files whose name ends in `.<extension>`, sorted by name
    fn gesture_files(&self, class_path: &Path) -> Result<Vec<PathBuf>> {
        let suffix = format!(".{}", self.extension);
        let mut files = Vec::new();
        for entry in read_dir(class_path)? {
            let path = entry.path();
            // name match rather than Path::extension, which is None for a bare ".json"
            let matches_extension = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(&suffix));

            if matches_extension && path.is_file() {
                files.push(path);
            } else {
                debug!("Ignoring {}", path.display());
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Build the configured tree and persist it.
///
/// The bundle is only created once every recording has been processed, so a
/// failed build leaves no output behind.
pub fn build_bundle(config: &AppConfig) -> Result<DatasetSummary> {
    let mut builder = DatasetBuilder::from_config(config)?;
    let (dataset, summary) = builder.build(config.dataset.root_path())?;

    info!("Saving dataset...");
    write_bundle(
        &dataset,
        &config.normalize,
        &config.dataset.output_path(),
        config.dataset.bundle_format(),
    )?;
    Ok(summary)
}

/// Immediate subdirectories of `root`, sorted by name
fn class_directories(root: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut classes = Vec::new();
    for entry in read_dir(root)? {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        classes.push((name, path));
    }
    classes.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(classes)
}

fn read_dir(path: &Path) -> Result<Vec<fs::DirEntry>> {
    fs::read_dir(path)
        .map_err(|e| GestureError::io(path, e))?
        .map(|entry| entry.map_err(|e| GestureError::io(path, e)))
        .collect()
}
