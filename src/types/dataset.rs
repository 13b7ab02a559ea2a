use std::collections::BTreeMap;

use super::Point;

/// Labeled, normalized gestures ready for a trainer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub sequences: Vec<Vec<Point>>,
    pub labels: Vec<usize>,
    pub class_to_label: BTreeMap<String, usize>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class, returning its label. Labels follow registration order.
    pub fn register_class(&mut self, name: &str) -> usize {
        let next = self.class_to_label.len();
        *self.class_to_label.entry(name.to_string()).or_insert(next)
    }

    pub fn push(&mut self, sequence: Vec<Point>, label: usize) {
        self.sequences.push(sequence);
        self.labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Reverse lookup of `class_to_label`
    pub fn class_name(&self, label: usize) -> Option<&str> {
        self.class_to_label
            .iter()
            .find(|(_, l)| **l == label)
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[Point], usize)> {
        self.sequences
            .iter()
            .zip(self.labels.iter())
            .map(|(seq, label)| (seq.as_slice(), *label))
    }
}

/// Per-class counts reported after a build
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSummary {
    pub classes: Vec<ClassSummary>,
    pub total_examples: usize,
    pub skipped_files: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassSummary {
    pub name: String,
    pub label: usize,
    pub examples: usize,
}

impl DatasetSummary {
    pub fn examples_for(&self, class_name: &str) -> Option<usize> {
        self.classes
            .iter()
            .find(|c| c.name == class_name)
            .map(|c| c.examples)
    }
}
