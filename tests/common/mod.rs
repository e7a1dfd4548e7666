//! Shared test utilities and fixture generators
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use infocontent::pipeline::{FeatureMatrix, InMemorySource};
use tempfile::TempDir;

/// Parse a decimal literal
pub fn dec(text: &str) -> BigDecimal {
    BigDecimal::from_str(text).unwrap()
}

/// Build a vector of decimals from literals
pub fn decs(values: &[&str]) -> Vec<BigDecimal> {
    values.iter().map(|v| dec(v)).collect()
}

/// Build a single-feature matrix from per-class literals
pub fn matrix(classes: &[&[&str]]) -> FeatureMatrix {
    FeatureMatrix::new(classes.iter().map(|c| decs(c)).collect())
}

/// Three classes with two features.
///
/// Feature 0 separates the classes cleanly, feature 1 is identical in
/// every class and carries no information.
pub fn three_class_tables() -> Vec<Vec<Vec<&'static str>>> {
    vec![
        vec![vec!["1", "5"], vec!["1.5", "6"], vec!["2", "7"], vec!["1.2", "8"]],
        vec![vec!["4", "5"], vec!["4.5", "6"], vec!["5", "7"], vec!["4.2", "8"]],
        vec![vec!["8", "5"], vec!["8.5", "6"], vec!["9", "7"], vec!["8.2", "8"]],
    ]
}

/// In-memory source over [`three_class_tables`]
pub fn three_class_source() -> InMemorySource {
    let tables = three_class_tables()
        .into_iter()
        .map(|rows| rows.into_iter().map(|row| decs(&row)).collect())
        .collect();
    InMemorySource::new(
        vec!["a.csv".to_string(), "b.csv".to_string(), "c.csv".to_string()],
        tables,
    )
    .unwrap()
}

/// Write a `;`-separated headerless class file
pub fn write_class_file(dir: &Path, name: &str, rows: &[Vec<&str>]) -> PathBuf {
    let path = dir.join(name);
    let content: String = rows
        .iter()
        .map(|row| format!("{}\n", row.join(";")))
        .collect();
    std::fs::write(&path, content).unwrap();
    path
}

/// Create a temporary class directory holding [`three_class_tables`]
pub fn create_class_directory() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, rows) in ["a.csv", "b.csv", "c.csv"]
        .iter()
        .zip(three_class_tables())
    {
        write_class_file(temp_dir.path(), name, &rows);
    }
    temp_dir
}

/// Random class tables for stress tests: `classes` classes of `objects` rows
pub fn create_random_tables(
    classes: usize,
    objects: usize,
    features: usize,
) -> Vec<Vec<Vec<BigDecimal>>> {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    (0..classes)
        .map(|class| {
            (0..objects)
                .map(|_| {
                    (0..features)
                        .map(|_| {
                            let value: f64 = rng.gen_range(0.0..100.0) + class as f64 * 10.0;
                            dec(&format!("{:.3}", value))
                        })
                        .collect()
                })
                .collect()
        })
        .collect()
}
