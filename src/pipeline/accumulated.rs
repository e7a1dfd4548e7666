//! Accumulated-frequency (Kolmogorov–Smirnov style) class comparison
//!
//! Counts stay un-normalized, so classes of different sizes differ in their
//! cumulative totals as well as in their shape.

use bigdecimal::BigDecimal;

use super::error::ScoringError;
use super::matrix::{pairwise, DiscretizedMatrix, GradationList};

/// Running totals of per-gradation counts.
pub fn cumulative_counts(counts: &[usize]) -> Vec<usize> {
    counts
        .iter()
        .scan(0usize, |running, &n| {
            *running += n;
            Some(*running)
        })
        .collect()
}

/// Largest absolute difference between the cumulative gradation counts of
/// two classes.
pub fn max_cumulative_diff(
    class_a: &[BigDecimal],
    class_b: &[BigDecimal],
    gradations: &GradationList,
) -> usize {
    let cumulative_a = cumulative_counts(&gradations.counts(class_a));
    let cumulative_b = cumulative_counts(&gradations.counts(class_b));

    cumulative_a
        .iter()
        .zip(&cumulative_b)
        .map(|(&a, &b)| a.abs_diff(b))
        .max()
        .unwrap_or(0)
}

/// Accumulated-frequency difference of the base class against every other
/// class, in class order.
pub fn accumulated_pairwise(
    matrix: &DiscretizedMatrix,
    gradations: &GradationList,
    base_class: usize,
) -> Result<Vec<usize>, ScoringError> {
    pairwise(matrix, base_class, |base, other| {
        Ok(max_cumulative_diff(base, other, gradations))
    })
}
