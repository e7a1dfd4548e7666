//! Feature matrix loading from per-class data files
//!
//! Every class is one file in a directory; each file row is one object and
//! each column one feature. CSV files are `;`-delimited and headerless.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use polars::prelude::*;

use super::matrix::FeatureMatrix;

/// Delimiter used by class CSV files
pub const CLASS_FILE_SEPARATOR: u8 = b';';

/// Supplier of one feature's values for every class.
pub trait FeatureSource {
    /// Load feature `feature_index` for every class.
    ///
    /// Each class contributes the objects at rows `start_index..object_count`,
    /// truncated when the class has fewer rows. Returns the class labels in
    /// class order alongside the matrix.
    fn load_feature_matrix(
        &self,
        feature_index: usize,
        object_count: usize,
        start_index: usize,
    ) -> Result<(Vec<String>, FeatureMatrix)>;

    /// Number of features every class provides.
    fn feature_count(&self) -> usize;

    /// Class labels in class order.
    fn class_labels(&self) -> Vec<String>;
}

/// Row range selected by `start_index..object_count` within `height` rows.
pub fn object_window(height: usize, object_count: usize, start_index: usize) -> (usize, usize) {
    let end = object_count.min(height);
    let start = start_index.min(end);
    (start, end - start)
}

/// One class file loaded into memory
#[derive(Debug, Clone)]
struct ClassFile {
    label: String,
    path: PathBuf,
    frame: DataFrame,
}

/// A directory whose files are the classes, ordered by file name
#[derive(Debug, Clone)]
pub struct ClassDirectory {
    root: PathBuf,
    classes: Vec<ClassFile>,
}

impl ClassDirectory {
    /// Enumerate and read every class file in `root`.
    ///
    /// Hidden files and subdirectories are ignored. Files are read as text so
    /// that values convert to decimals without passing through binary floats.
    pub fn open(root: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(root)
            .with_context(|| format!("Failed to read class directory: {}", root.display()))?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to list class directory: {}", root.display()))?;
            let path = entry.path();
            let hidden = entry.file_name().to_string_lossy().starts_with('.');
            if path.is_file() && !hidden {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            anyhow::bail!("No class files found in {}", root.display());
        }

        let classes = paths
            .into_iter()
            .map(|path| {
                let frame = read_class_file(&path)?;
                let label = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                log::debug!(
                    "loaded class '{}' with {} objects and {} features",
                    label,
                    frame.height(),
                    frame.width()
                );
                Ok(ClassFile { label, path, frame })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: root.to_path_buf(),
            classes,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Number of objects stored for each class.
    pub fn object_counts(&self) -> Vec<usize> {
        self.classes.iter().map(|c| c.frame.height()).collect()
    }
}

impl FeatureSource for ClassDirectory {
    fn load_feature_matrix(
        &self,
        feature_index: usize,
        object_count: usize,
        start_index: usize,
    ) -> Result<(Vec<String>, FeatureMatrix)> {
        let classes = self
            .classes
            .iter()
            .map(|class| {
                extract_feature(class, feature_index, object_count, start_index).with_context(
                    || format!("Failed to load feature {} from {}", feature_index + 1, class.path.display()),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((self.class_labels(), FeatureMatrix::new(classes)))
    }

    fn feature_count(&self) -> usize {
        self.classes
            .iter()
            .map(|c| c.frame.width())
            .min()
            .unwrap_or(0)
    }

    fn class_labels(&self) -> Vec<String> {
        self.classes.iter().map(|c| c.label.clone()).collect()
    }
}

/// Read a class file (CSV or Parquet based on extension) with every column as text
fn read_class_file(path: &Path) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let lf = match extension.as_str() {
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => LazyCsvReader::new(path)
            .with_has_header(false)
            .with_separator(CLASS_FILE_SEPARATOR)
            .with_infer_schema_length(Some(0))
            .with_truncate_ragged_lines(true)
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
    };

    lf.collect()
        .with_context(|| format!("Failed to read class file: {}", path.display()))
}

fn extract_feature(
    class: &ClassFile,
    feature_index: usize,
    object_count: usize,
    start_index: usize,
) -> Result<Vec<BigDecimal>> {
    let column = class.frame.get_columns().get(feature_index).ok_or_else(|| {
        anyhow::anyhow!(
            "Feature {} does not exist (class '{}' has {} features)",
            feature_index + 1,
            class.label,
            class.frame.width()
        )
    })?;

    let (start, len) = object_window(class.frame.height(), object_count, start_index);
    let text = column.slice(start as i64, len).cast(&DataType::String)?;

    text.str()?
        .into_iter()
        .enumerate()
        .map(|(offset, cell)| {
            let row = start + offset;
            let cell = cell.ok_or_else(|| {
                anyhow::anyhow!("Missing value at row {} of class '{}'", row, class.label)
            })?;
            parse_value(cell).with_context(|| {
                format!("Invalid value '{}' at row {} of class '{}'", cell, row, class.label)
            })
        })
        .collect()
}

/// Parse a textual feature value into an exact decimal.
pub fn parse_value(text: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(text.trim())
        .with_context(|| format!("'{}' is not a decimal number", text.trim()))
}

/// Class tables held in memory: `tables[class][object][feature]`
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    labels: Vec<String>,
    tables: Vec<Vec<Vec<BigDecimal>>>,
}

impl InMemorySource {
    pub fn new(labels: Vec<String>, tables: Vec<Vec<Vec<BigDecimal>>>) -> Result<Self> {
        if labels.len() != tables.len() {
            anyhow::bail!(
                "Got {} class labels for {} class tables",
                labels.len(),
                tables.len()
            );
        }
        Ok(Self { labels, tables })
    }
}

impl FeatureSource for InMemorySource {
    fn load_feature_matrix(
        &self,
        feature_index: usize,
        object_count: usize,
        start_index: usize,
    ) -> Result<(Vec<String>, FeatureMatrix)> {
        let classes = self
            .tables
            .iter()
            .zip(&self.labels)
            .map(|(rows, label)| {
                let (start, len) = object_window(rows.len(), object_count, start_index);
                rows[start..start + len]
                    .iter()
                    .enumerate()
                    .map(|(offset, row)| {
                        row.get(feature_index).cloned().ok_or_else(|| {
                            anyhow::anyhow!(
                                "Missing feature {} at row {} of class '{}'",
                                feature_index + 1,
                                start + offset,
                                label
                            )
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((self.labels.clone(), FeatureMatrix::new(classes)))
    }

    fn feature_count(&self) -> usize {
        self.tables
            .iter()
            .flat_map(|rows| rows.iter().map(Vec::len))
            .min()
            .unwrap_or(0)
    }

    fn class_labels(&self) -> Vec<String> {
        self.labels.clone()
    }
}
