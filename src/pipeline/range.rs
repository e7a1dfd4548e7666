//! Global value range of a feature matrix

use bigdecimal::BigDecimal;
use serde::Serialize;

use super::error::ScoringError;
use super::matrix::FeatureMatrix;

/// Extremes of a feature across all classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueRange {
    pub maximum: BigDecimal,
    pub minimum: BigDecimal,
}

impl ValueRange {
    /// True when every value of the feature is identical.
    pub fn is_zero_width(&self) -> bool {
        self.maximum == self.minimum
    }
}

/// Find the maximum and minimum over every value of every class.
///
/// # Errors
/// `EmptyMatrix` for a matrix without classes, `EmptyClass` when any class
/// has no values.
pub fn find_range(matrix: &FeatureMatrix) -> Result<ValueRange, ScoringError> {
    matrix.ensure_populated()?;

    let mut values = matrix.classes().iter().flatten();
    let first = values.next().ok_or(ScoringError::EmptyMatrix)?;

    let (minimum, maximum) = values.fold((first, first), |(lo, hi), v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    });

    Ok(ValueRange {
        maximum: maximum.clone(),
        minimum: minimum.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn decs(values: &[&str]) -> Vec<BigDecimal> {
        values.iter().map(|v| BigDecimal::from_str(v).unwrap()).collect()
    }

    #[test]
    fn test_range_spans_all_classes() {
        let matrix = FeatureMatrix::new(vec![
            decs(&["3.5", "1.25"]),
            decs(&["-2", "0"]),
            decs(&["7.125"]),
        ]);
        let range = find_range(&matrix).unwrap();
        assert_eq!(range.maximum, BigDecimal::from_str("7.125").unwrap());
        assert_eq!(range.minimum, BigDecimal::from(-2));
        assert!(!range.is_zero_width());
    }

    #[test]
    fn test_range_of_constant_feature() {
        let matrix = FeatureMatrix::new(vec![decs(&["4"]), decs(&["4.0", "4.00"])]);
        let range = find_range(&matrix).unwrap();
        assert!(range.is_zero_width());
    }

    #[test]
    fn test_range_rejects_empty_input() {
        assert_eq!(
            find_range(&FeatureMatrix::new(vec![])),
            Err(ScoringError::EmptyMatrix)
        );
        assert_eq!(
            find_range(&FeatureMatrix::new(vec![decs(&["1"]), vec![]])),
            Err(ScoringError::EmptyClass { class_index: 1 })
        );
    }
}
