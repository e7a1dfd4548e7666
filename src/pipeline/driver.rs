//! Per-feature orchestration of range detection, discretization and scoring

use anyhow::Result;
use bigdecimal::BigDecimal;
use indicatif::ProgressBar;
use serde::Serialize;

use super::accumulated::accumulated_pairwise;
use super::discretize::discretize_range;
use super::error::ScoringError;
use super::kullback::kullback_pairwise;
use super::loader::FeatureSource;
use super::matrix::{pairwise_class_numbers, FeatureMatrix, GradationList};
use super::precision::Precision;
use super::range::{find_range, ValueRange};
use super::shannon::{shannon_information_content, shannon_pairwise};

/// Default number of gradations per feature
pub const DEFAULT_BINS: usize = 10;

/// Default index of the class every other class is compared against
pub const DEFAULT_BASE_CLASS: usize = 2;

/// Default end of the object window
pub const DEFAULT_OBJECT_COUNT: usize = 800;

/// What to do when scoring a feature fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the run at the first failing feature
    #[default]
    Abort,
    /// Record the failure and continue with the next feature
    Skip,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::Skip => write!(f, "skip"),
        }
    }
}

/// Settings for one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisConfig {
    /// Number of equal-width gradations per feature
    pub bins: usize,
    /// Class compared against every other class in pairwise scores
    pub base_class: usize,
    /// Objects are taken from rows `start_index..object_count`
    pub object_count: usize,
    pub start_index: usize,
    pub precision: Precision,
    pub failure_policy: FailurePolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            base_class: DEFAULT_BASE_CLASS,
            object_count: DEFAULT_OBJECT_COUNT,
            start_index: 0,
            precision: Precision::default(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// Scores of a single feature
#[derive(Debug, Clone, Serialize)]
pub struct FeatureReport {
    /// Zero-based feature (column) index
    pub feature_index: usize,
    pub range: ValueRange,
    pub gradations: GradationList,
    /// Shannon information content over all classes
    pub shannon: BigDecimal,
    /// Shannon information content of the base class against each other class
    pub shannon_pairs: Vec<BigDecimal>,
    /// Kullback divergence of the base class against each other class
    pub kullback: Vec<BigDecimal>,
    /// Accumulated-frequency difference of the base class against each other class
    pub accumulated: Vec<usize>,
}

/// A feature left out of the results under [`FailurePolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFeature {
    pub feature_index: usize,
    pub reason: String,
}

/// Results of a full run over every feature
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResults {
    pub class_labels: Vec<String>,
    pub base_class: usize,
    pub features: Vec<FeatureReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFeature>,
}

impl AnalysisResults {
    /// Input class numbers of the entries in every pairwise list.
    pub fn pair_class_numbers(&self) -> Vec<usize> {
        pairwise_class_numbers(self.class_labels.len(), self.base_class)
    }

    /// Feature with the highest Shannon information content.
    pub fn best_feature(&self) -> Option<&FeatureReport> {
        self.features.iter().max_by(|a, b| a.shannon.cmp(&b.shannon))
    }
}

/// Range, discretize and score one feature matrix.
///
/// # Errors
/// Any [`ScoringError`] from the range finder, discretizer or scorers,
/// including `BaseClassOutOfRange` when the configured base class does not
/// exist in `matrix`.
pub fn analyze_feature(
    feature_index: usize,
    matrix: &FeatureMatrix,
    config: &AnalysisConfig,
) -> Result<FeatureReport, ScoringError> {
    let range = find_range(matrix)?;
    if config.base_class >= matrix.num_classes() {
        return Err(ScoringError::BaseClassOutOfRange {
            base_class: config.base_class,
            class_count: matrix.num_classes(),
        });
    }

    let precision = &config.precision;
    let discretization = discretize_range(matrix, &range, config.bins, precision)?;
    let gradations = discretization.gradations();
    let discretized = &discretization.matrix;

    log::debug!(
        "feature {}: range [{}, {}], {} gradations",
        feature_index + 1,
        range.minimum,
        range.maximum,
        gradations.len()
    );

    let shannon = shannon_information_content(discretized, gradations, precision)?;
    let shannon_pairs = shannon_pairwise(discretized, gradations, config.base_class, precision)?;
    let kullback = kullback_pairwise(discretized, gradations, config.base_class, precision)?;
    let accumulated = accumulated_pairwise(discretized, gradations, config.base_class)?;

    Ok(FeatureReport {
        feature_index,
        range,
        gradations: gradations.clone(),
        shannon,
        shannon_pairs,
        kullback,
        accumulated,
    })
}

/// Score features `0..feature_count` of `source` one after another.
///
/// Loader failures always stop the run. Scoring failures stop it under
/// [`FailurePolicy::Abort`] and are collected in
/// [`AnalysisResults::skipped`] under [`FailurePolicy::Skip`].
pub fn run_all<S: FeatureSource + ?Sized>(
    source: &S,
    feature_count: usize,
    config: &AnalysisConfig,
    progress: &ProgressBar,
) -> Result<AnalysisResults> {
    log::info!(
        "scoring {} features with {} gradations against base class {}",
        feature_count,
        config.bins,
        config.base_class
    );

    let mut class_labels: Option<Vec<String>> = None;
    let mut features = Vec::with_capacity(feature_count);
    let mut skipped = Vec::new();

    for feature_index in 0..feature_count {
        let (labels, matrix) =
            source.load_feature_matrix(feature_index, config.object_count, config.start_index)?;

        match &class_labels {
            Some(known) if *known != labels => anyhow::bail!(
                "Class labels changed while loading feature {}: {:?} vs {:?}",
                feature_index + 1,
                known,
                labels
            ),
            Some(_) => {}
            None => class_labels = Some(labels),
        }

        match analyze_feature(feature_index, &matrix, config) {
            Ok(report) => features.push(report),
            Err(err) => match config.failure_policy {
                FailurePolicy::Abort => {
                    return Err(anyhow::Error::new(err)
                        .context(format!("Failed to score feature {}", feature_index + 1)));
                }
                FailurePolicy::Skip => {
                    log::warn!("skipping feature {}: {}", feature_index + 1, err);
                    skipped.push(SkippedFeature {
                        feature_index,
                        reason: err.to_string(),
                    });
                }
            },
        }

        progress.inc(1);
    }

    Ok(AnalysisResults {
        class_labels: class_labels.unwrap_or_else(|| source.class_labels()),
        base_class: config.base_class,
        features,
        skipped,
    })
}
