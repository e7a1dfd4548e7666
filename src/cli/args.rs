//! Command-line argument definitions using clap

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::pipeline::{
    AnalysisConfig, FailurePolicy, Precision, DEFAULT_PRECISION_DIGITS, MAX_PRECISION_DIGITS,
};

/// infocontent - Score how well each feature discriminates between classes
#[derive(Parser, Debug)]
#[command(name = "infocontent")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding one data file per class (';'-separated CSV or Parquet).
    /// Classes are ordered by file name.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory for the reports.
    /// Defaults to a '<input>_report' directory next to the input directory.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Number of features (columns) to score.
    /// Defaults to the number of columns of the narrowest class file.
    #[arg(long)]
    pub features: Option<usize>,

    /// End of the object window: objects are read from rows start..objects
    #[arg(long, default_value = "800")]
    pub objects: usize,

    /// First object (row) to read from every class file
    #[arg(long, default_value = "0")]
    pub start: usize,

    /// Number of equal-width gradations per feature
    #[arg(long, default_value = "10", value_parser = validate_bins)]
    pub bins: usize,

    /// Index of the base class every other class is compared against
    #[arg(long, default_value = "2")]
    pub base_class: usize,

    /// Significant decimal digits kept by every calculation
    #[arg(long, default_value_t = DEFAULT_PRECISION_DIGITS, value_parser = validate_precision)]
    pub precision: u64,

    /// Continue with the next feature when one cannot be scored
    #[arg(long, default_value = "false")]
    pub skip_failed: bool,

    /// Package all report files into a single zip archive
    #[arg(long, default_value = "false")]
    pub zip: bool,

    /// Skip interactive confirmation prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,
}

impl Cli {
    /// Get the report directory, deriving it from the input if not provided.
    /// The derived directory sits next to the input with a '_report' suffix.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            let parent = self
                .input
                .parent()
                .unwrap_or_else(|| std::path::Path::new("."));
            let name = self
                .input
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("classes");
            parent.join(format!("{}_report", name))
        })
    }

    /// Build the analysis settings from the parsed arguments.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        if self.start >= self.objects {
            anyhow::bail!(
                "--start ({}) must be smaller than --objects ({})",
                self.start,
                self.objects
            );
        }

        Ok(AnalysisConfig {
            bins: self.bins,
            base_class: self.base_class,
            object_count: self.objects,
            start_index: self.start,
            precision: Precision::new(self.precision)?,
            failure_policy: if self.skip_failed {
                FailurePolicy::Skip
            } else {
                FailurePolicy::Abort
            },
        })
    }
}

/// Validator for bins parameter
fn validate_bins(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value == 0 {
        Err("bins must be greater than 0".to_string())
    } else {
        Ok(value)
    }
}

/// Validator for precision parameter
fn validate_precision(s: &str) -> Result<u64, String> {
    let value: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(1..=MAX_PRECISION_DIGITS).contains(&value) {
        Err(format!(
            "precision must be between 1 and {}, got {}",
            MAX_PRECISION_DIGITS, value
        ))
    } else {
        Ok(value)
    }
}
