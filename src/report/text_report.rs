//! Plain-text report listing every feature's scores

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::AnalysisResults;

/// Default file name of the text report
pub const TEXT_REPORT_FILE: &str = "report.txt";

const SEPARATOR_WIDTH: usize = 50;

/// Write the text report for a finished run to `out`.
///
/// Pairwise entries are labelled with the input class number of the
/// class compared against the base class.
pub fn write_text_report_to<W: Write>(
    out: &mut W,
    results: &AnalysisResults,
    source: &str,
) -> std::io::Result<()> {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let class_numbers = results.pair_class_numbers();

    writeln!(out, "Report on parse of:\t{}\n", source)?;
    writeln!(out, "Classes:")?;
    for (index, label) in results.class_labels.iter().enumerate() {
        let marker = if index == results.base_class { " (base)" } else { "" };
        writeln!(out, "{}: {}{}", index, label, marker)?;
    }
    writeln!(out, "\n{}\n", separator)?;

    for feature in &results.features {
        writeln!(out, "Report for feature #{}:\n", feature.feature_index + 1)?;
        writeln!(out, "Shannon's information content:\t{}\n", feature.shannon)?;

        write_pairs(
            out,
            "Shannon's information content for pairs:",
            &class_numbers,
            &feature.shannon_pairs,
        )?;
        write_pairs(
            out,
            "Kullback's information content:",
            &class_numbers,
            &feature.kullback,
        )?;
        write_pairs(
            out,
            "Accumulated frequencies information content:",
            &class_numbers,
            &feature.accumulated,
        )?;

        writeln!(out, "{}\n", separator)?;
    }

    if !results.skipped.is_empty() {
        writeln!(out, "Skipped features:")?;
        for skipped in &results.skipped {
            writeln!(
                out,
                "Feature #{}: {}",
                skipped.feature_index + 1,
                skipped.reason
            )?;
        }
    }

    Ok(())
}

fn write_pairs<W: Write, T: std::fmt::Display>(
    out: &mut W,
    title: &str,
    class_numbers: &[usize],
    values: &[T],
) -> std::io::Result<()> {
    writeln!(out, "{}", title)?;
    for (class_number, value) in class_numbers.iter().zip(values) {
        writeln!(out, "Class #{}: {}", class_number, value)?;
    }
    writeln!(out)
}

/// Render the text report into a string.
pub fn render_text_report(results: &AnalysisResults, source: &str) -> Result<String> {
    let mut buffer = Vec::new();
    write_text_report_to(&mut buffer, results, source).context("Failed to render report")?;
    String::from_utf8(buffer).context("Report is not valid UTF-8")
}

/// Write the text report to `output_path`.
pub fn write_text_report(results: &AnalysisResults, source: &str, output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)
        .with_context(|| format!("Failed to create report: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    write_text_report_to(&mut writer, results, source)
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{FeatureReport, GradationList, SkippedFeature, ValueRange};
    use bigdecimal::BigDecimal;

    fn results() -> AnalysisResults {
        AnalysisResults {
            class_labels: vec!["a.csv".into(), "b.csv".into(), "c.csv".into()],
            base_class: 1,
            features: vec![FeatureReport {
                feature_index: 0,
                range: ValueRange {
                    maximum: BigDecimal::from(2),
                    minimum: BigDecimal::from(1),
                },
                gradations: GradationList::new(vec![BigDecimal::from(1)]),
                shannon: BigDecimal::from(1),
                shannon_pairs: vec![BigDecimal::from(0), BigDecimal::from(1)],
                kullback: vec![BigDecimal::from(0), BigDecimal::from(0)],
                accumulated: vec![4, 7],
            }],
            skipped: vec![SkippedFeature {
                feature_index: 1,
                reason: "class 0 contains no values".into(),
            }],
        }
    }

    #[test]
    fn test_pairs_are_labelled_with_input_class_numbers() {
        let text = render_text_report(&results(), "/data/classes").unwrap();
        assert!(text.contains("Report on parse of:\t/data/classes"));
        assert!(text.contains("1: b.csv (base)"));
        assert!(text.contains("Class #0: 4"));
        assert!(text.contains("Class #2: 7"));
        assert!(!text.contains("Class #1:"));
    }

    #[test]
    fn test_skipped_features_are_listed() {
        let text = render_text_report(&results(), "dir").unwrap();
        assert!(text.contains("Report for feature #1:"));
        assert!(text.contains("Feature #2: class 0 contains no values"));
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_propagate() {
        let err = write_text_report_to(&mut FullDisk, &results(), "dir").unwrap_err();
        assert_eq!(err.to_string(), "disk full");

        let missing = std::path::Path::new("/nonexistent/infocontent/report.txt");
        assert!(write_text_report(&results(), "dir", missing).is_err());
    }
}
