//! Error types for range detection, discretization and scoring.
//!
//! These are the only failures the core can produce. Mathematical
//! degeneracies (a zero-probability bin, a class with zero total count) are
//! not errors and are handled inline by the scorers.

use bigdecimal::BigDecimal;

/// Errors that abort processing of a single feature.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// The feature matrix has no classes at all.
    #[error("feature matrix contains no classes")]
    EmptyMatrix,

    /// One class of the feature matrix has no values.
    #[error("class {class_index} contains no values")]
    EmptyClass { class_index: usize },

    /// The caller passed a maximum below the minimum.
    #[error("degenerate range: maximum {maximum} is below minimum {minimum}")]
    DegenerateRange {
        maximum: BigDecimal,
        minimum: BigDecimal,
    },

    /// Discretization was asked for zero bins.
    #[error("gradation count must be greater than zero")]
    ZeroBinCount,

    /// The base class index does not name a class of the matrix.
    #[error("base class {base_class} is out of range for {class_count} classes")]
    BaseClassOutOfRange {
        base_class: usize,
        class_count: usize,
    },

    /// Shannon information content needs a logarithm base of at least 2.
    #[error("information content requires at least 2 classes, found {0}")]
    TooFewClasses(usize),

    /// Adding the step no longer moves the boundary at the working precision.
    #[error("step {step} does not advance boundary {boundary} at {digits} significant digits")]
    StalledBoundary {
        step: BigDecimal,
        boundary: BigDecimal,
        digits: u64,
    },

    /// Precision must keep at least one significant digit.
    #[error("precision must be between 1 and {max} significant digits, got {digits}")]
    InvalidPrecision { digits: u64, max: u64 },

    /// A logarithm produced a value that has no decimal representation.
    #[error("logarithm of {0} is not a finite number")]
    Unrepresentable(BigDecimal),
}

impl ScoringError {
    /// True for the two empty-input variants.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ScoringError::EmptyMatrix | ScoringError::EmptyClass { .. })
    }
}
