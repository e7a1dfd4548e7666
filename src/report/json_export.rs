//! JSON export of a full analysis run

use std::path::Path;

use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{AnalysisConfig, AnalysisResults, FeatureReport, SkippedFeature};

/// Default file name of the JSON export
pub const JSON_REPORT_FILE: &str = "analysis.json";

/// Metadata about the analysis run
#[derive(Serialize)]
pub struct AnalysisMetadata {
    /// Timestamp of the analysis (ISO 8601 format)
    pub timestamp: String,
    /// infocontent version
    pub infocontent_version: String,
    /// Directory the classes were read from
    pub input_directory: String,
    /// Settings the run used
    pub settings: AnalysisConfig,
    /// Class labels in class order
    pub classes: Vec<String>,
}

/// Summary statistics of the run
#[derive(Serialize)]
pub struct AnalysisSummary {
    pub features_scored: usize,
    pub features_skipped: usize,
    /// One-based number of the feature with the highest Shannon value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_feature: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_shannon: Option<BigDecimal>,
}

/// Complete export document
#[derive(Serialize)]
pub struct AnalysisExport<'a> {
    pub metadata: AnalysisMetadata,
    pub summary: AnalysisSummary,
    /// Input class number of each entry in the pairwise lists
    pub pair_classes: Vec<usize>,
    pub features: &'a [FeatureReport],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFeature>,
}

/// Assemble the export document for `results`.
pub fn build_analysis_export<'a>(
    results: &'a AnalysisResults,
    config: &AnalysisConfig,
    input_directory: &str,
) -> AnalysisExport<'a> {
    let best = results.best_feature();

    AnalysisExport {
        metadata: AnalysisMetadata {
            timestamp: Utc::now().to_rfc3339(),
            infocontent_version: env!("CARGO_PKG_VERSION").to_string(),
            input_directory: input_directory.to_string(),
            settings: config.clone(),
            classes: results.class_labels.clone(),
        },
        summary: AnalysisSummary {
            features_scored: results.features.len(),
            features_skipped: results.skipped.len(),
            best_feature: best.map(|f| f.feature_index + 1),
            best_shannon: best.map(|f| f.shannon.clone()),
        },
        pair_classes: results.pair_class_numbers(),
        features: &results.features,
        skipped: results.skipped.clone(),
    }
}

/// Export the analysis results to a pretty-printed JSON file.
pub fn export_analysis_json(
    results: &AnalysisResults,
    config: &AnalysisConfig,
    input_directory: &str,
    output_path: &Path,
) -> Result<()> {
    let export = build_analysis_export(results, config, input_directory);
    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize analysis results to JSON")?;
    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON file: {}", output_path.display()))?;
    Ok(())
}
