//! Report module - writing analysis results

pub mod bundle;
pub mod csv_export;
pub mod json_export;
pub mod summary;
pub mod text_report;

pub use bundle::*;
pub use csv_export::*;
pub use json_export::*;
pub use summary::*;
pub use text_report::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::pipeline::{AnalysisConfig, AnalysisResults};

/// Write the text, CSV and JSON reports into `output_dir`.
///
/// With `bundle` set the files are packaged into [`REPORT_BUNDLE_FILE`] and
/// only the archive path is returned.
pub fn write_all_reports(
    results: &AnalysisResults,
    config: &AnalysisConfig,
    input_directory: &Path,
    output_dir: &Path,
    bundle: bool,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create report directory: {}", output_dir.display()))?;

    let source = input_directory.display().to_string();
    let mut written = Vec::new();

    let text_path = output_dir.join(TEXT_REPORT_FILE);
    write_text_report(results, &source, &text_path)?;
    written.push(text_path);

    written.extend(export_csv_results(results, output_dir)?);

    let json_path = output_dir.join(JSON_REPORT_FILE);
    export_analysis_json(results, config, &source, &json_path)?;
    written.push(json_path);

    if bundle {
        let zip_path = output_dir.join(REPORT_BUNDLE_FILE);
        package_reports(&written, &zip_path)?;
        return Ok(vec![zip_path]);
    }

    Ok(written)
}
