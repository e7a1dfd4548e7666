//! Symmetric (Jeffreys) Kullback divergence between two classes

use bigdecimal::{BigDecimal, Zero};

use super::error::ScoringError;
use super::matrix::{pairwise, DiscretizedMatrix, GradationList};
use super::precision::Precision;

/// Divergence `Σ log2(p_a / p_b) · (p_a - p_b)` between two classes.
///
/// Gradations where either class has no mass are skipped rather than
/// treated as infinite. A single gradation carries no divergence and scores
/// 0 before any counting happens.
pub fn divergence(
    class_a: &[BigDecimal],
    class_b: &[BigDecimal],
    gradations: &GradationList,
    precision: &Precision,
) -> Result<BigDecimal, ScoringError> {
    if gradations.len() == 1 {
        return Ok(BigDecimal::zero());
    }

    let p_a = distribution(&gradations.counts(class_a), precision);
    let p_b = distribution(&gradations.counts(class_b), precision);

    let mut result = BigDecimal::zero();
    for (a, b) in p_a.iter().zip(&p_b) {
        if a.is_zero() || b.is_zero() {
            continue;
        }
        let Some(ratio) = precision.div(a, b) else {
            continue;
        };
        let log_ratio = precision.log(&ratio, 2.0)?;
        let term = precision.mul(&log_ratio, &precision.sub(a, b));
        result = precision.add(&result, &term);
    }

    Ok(result)
}

/// Divergence of the base class from every other class, in class order.
pub fn kullback_pairwise(
    matrix: &DiscretizedMatrix,
    gradations: &GradationList,
    base_class: usize,
    precision: &Precision,
) -> Result<Vec<BigDecimal>, ScoringError> {
    pairwise(matrix, base_class, |base, other| {
        divergence(base, other, gradations, precision)
    })
}

/// Normalize counts by their own total; an all-zero row stays all zero.
fn distribution(counts: &[usize], precision: &Precision) -> Vec<BigDecimal> {
    let total: usize = counts.iter().sum();
    counts
        .iter()
        .map(|&n| precision.ratio(n, total).unwrap_or_else(BigDecimal::zero))
        .collect()
}
