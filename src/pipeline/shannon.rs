//! Shannon information content of a discretized feature
//!
//! For every gradation the conditional class distribution is weighed by the
//! share of objects falling into that gradation:
//!
//! ```text
//! I = 1 + Σ_g (n_g / N) · Σ_c p(c|g) · log_C p(c|g)
//! ```
//!
//! The logarithm base is the number of classes in the matrix being scored,
//! so pairwise scores on two-class sub-matrices use base 2.

use bigdecimal::{BigDecimal, One, Zero};

use super::error::ScoringError;
use super::matrix::{pairwise, DiscretizedMatrix, GradationList};
use super::precision::Precision;

/// Information content of a discretized feature over all of its classes.
///
/// # Errors
/// `TooFewClasses` for fewer than two classes, `EmptyMatrix` when the
/// classes hold no objects.
pub fn shannon_information_content(
    matrix: &DiscretizedMatrix,
    gradations: &GradationList,
    precision: &Precision,
) -> Result<BigDecimal, ScoringError> {
    information_content(&matrix.class_slices(), gradations, precision)
}

/// Information content of the base class paired with every other class.
///
/// Each pair is scored as its own two-class matrix over the shared
/// gradations. Results follow the input class order without the base.
pub fn shannon_pairwise(
    matrix: &DiscretizedMatrix,
    gradations: &GradationList,
    base_class: usize,
    precision: &Precision,
) -> Result<Vec<BigDecimal>, ScoringError> {
    pairwise(matrix, base_class, |base, other| {
        information_content(&[base, other], gradations, precision)
    })
}

fn information_content(
    classes: &[&[BigDecimal]],
    gradations: &GradationList,
    precision: &Precision,
) -> Result<BigDecimal, ScoringError> {
    let class_count = classes.len();
    if class_count < 2 {
        return Err(ScoringError::TooFewClasses(class_count));
    }
    let total_objects: usize = classes.iter().map(|c| c.len()).sum();
    if total_objects == 0 {
        return Err(ScoringError::EmptyMatrix);
    }
    let base = class_count as f64;

    // counts[c][g]
    let counts: Vec<Vec<usize>> = classes.iter().map(|c| gradations.counts(c)).collect();

    let mut result = BigDecimal::zero();
    for g in 0..gradations.len() {
        let frequencies: Vec<usize> = counts.iter().map(|per_class| per_class[g]).collect();
        let gradation_total: usize = frequencies.iter().sum();

        let mut part = BigDecimal::zero();
        for &frequency in &frequencies {
            if frequency == 0 || gradation_total == 0 {
                continue;
            }
            let Some(p) = precision.ratio(frequency, gradation_total) else {
                continue;
            };
            let contribution = precision.mul(&p, &precision.log(&p, base)?);
            part = precision.add(&part, &contribution);
        }

        let weight = precision
            .ratio(gradation_total, total_objects)
            .unwrap_or_else(BigDecimal::zero);
        part = precision.mul(&part, &weight);
        result = precision.add(&result, &part);
    }

    Ok(precision.add(&result, &BigDecimal::one()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<BigDecimal> {
        values.iter().map(|&v| BigDecimal::from(v)).collect()
    }

    #[test]
    fn test_identical_classes_carry_no_information() {
        let matrix = DiscretizedMatrix::new(vec![ints(&[1, 2]), ints(&[1, 2])]);
        let gradations = GradationList::new(ints(&[1, 2]));
        let value =
            shannon_information_content(&matrix, &gradations, &Precision::default()).unwrap();
        assert_eq!(value, BigDecimal::zero());
    }

    #[test]
    fn test_disjoint_classes_carry_full_information() {
        let matrix = DiscretizedMatrix::new(vec![ints(&[1, 1]), ints(&[2, 2])]);
        let gradations = GradationList::new(ints(&[1, 2]));
        let value =
            shannon_information_content(&matrix, &gradations, &Precision::default()).unwrap();
        assert_eq!(value, BigDecimal::one());
    }

    #[test]
    fn test_single_class_is_rejected() {
        let matrix = DiscretizedMatrix::new(vec![ints(&[1, 2])]);
        let gradations = GradationList::new(ints(&[1, 2]));
        assert_eq!(
            shannon_information_content(&matrix, &gradations, &Precision::default()),
            Err(ScoringError::TooFewClasses(1))
        );
    }

    #[test]
    fn test_empty_gradations_score_one() {
        let matrix = DiscretizedMatrix::new(vec![ints(&[1]), ints(&[2])]);
        let gradations = GradationList::new(vec![]);
        let value =
            shannon_information_content(&matrix, &gradations, &Precision::default()).unwrap();
        assert_eq!(value, BigDecimal::one());
    }
}
