//! Semicolon-separated result tables, one file per measure

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::pipeline::AnalysisResults;

pub const SHANNON_CSV_FILE: &str = "result_shannon.csv";
pub const SHANNON_PAIRS_CSV_FILE: &str = "result_shannon_pairs.csv";
pub const KULLBACK_CSV_FILE: &str = "result_kullback.csv";
pub const ACCUMULATED_CSV_FILE: &str = "result_accum.csv";

const DELIMITER: &str = ";";

/// Write the four result tables into `output_dir`, returning their paths.
///
/// `result_shannon.csv` holds a heading row of feature numbers and one row of
/// values. The pairwise tables hold a `Feature;Class #k...` heading and one
/// row per scored feature.
pub fn export_csv_results(results: &AnalysisResults, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let shannon_path = output_dir.join(SHANNON_CSV_FILE);
    write_rows(&shannon_path, &shannon_rows(results))?;

    let heading = pair_heading(results);
    let tables: [(&str, Vec<Vec<String>>); 3] = [
        (
            SHANNON_PAIRS_CSV_FILE,
            pair_rows(results, |f| display_all(&f.shannon_pairs)),
        ),
        (
            KULLBACK_CSV_FILE,
            pair_rows(results, |f| display_all(&f.kullback)),
        ),
        (
            ACCUMULATED_CSV_FILE,
            pair_rows(results, |f| display_all(&f.accumulated)),
        ),
    ];

    let mut paths = vec![shannon_path];
    for (file_name, rows) in tables {
        let path = output_dir.join(file_name);
        let mut all_rows = vec![heading.clone()];
        all_rows.extend(rows);
        write_rows(&path, &all_rows)?;
        paths.push(path);
    }

    Ok(paths)
}

fn shannon_rows(results: &AnalysisResults) -> Vec<Vec<String>> {
    let heading = results
        .features
        .iter()
        .map(|f| format!("Feature #{}", f.feature_index + 1))
        .collect();
    let values = results.features.iter().map(|f| f.shannon.to_string()).collect();
    vec![heading, values]
}

fn pair_heading(results: &AnalysisResults) -> Vec<String> {
    std::iter::once("Feature".to_string())
        .chain(
            results
                .pair_class_numbers()
                .into_iter()
                .map(|k| format!("Class #{}", k)),
        )
        .collect()
}

fn pair_rows<F>(results: &AnalysisResults, values: F) -> Vec<Vec<String>>
where
    F: Fn(&crate::pipeline::FeatureReport) -> Vec<String>,
{
    results
        .features
        .iter()
        .map(|f| {
            std::iter::once((f.feature_index + 1).to_string())
                .chain(values(f))
                .collect()
        })
        .collect()
}

fn display_all<T: ToString>(values: &[T]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn write_rows(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let mut file = std::io::BufWriter::new(
        std::fs::File::create(path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?,
    );
    for row in rows {
        let line: Vec<String> = row.iter().map(|field| escape_csv_field(field)).collect();
        writeln!(file, "{}", line.join(DELIMITER))
            .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    }
    file.flush()
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(())
}

/// Escape a field for CSV (handle delimiters and quotes)
fn escape_csv_field(field: &str) -> String {
    if field.contains(DELIMITER) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("0.5"), "0.5");
        assert_eq!(escape_csv_field("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
