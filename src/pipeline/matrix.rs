//! Feature matrices, gradation lists and the class-pairwise decomposition

use bigdecimal::BigDecimal;
use serde::Serialize;

use super::error::ScoringError;

/// Raw values of one feature, one row per class.
///
/// Class order is significant: a class's position is its class number and
/// selects the base class for pairwise comparisons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureMatrix {
    classes: Vec<Vec<BigDecimal>>,
}

impl FeatureMatrix {
    pub fn new(classes: Vec<Vec<BigDecimal>>) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &[Vec<BigDecimal>] {
        &self.classes
    }

    pub fn class(&self, index: usize) -> Option<&[BigDecimal]> {
        self.classes.get(index).map(Vec::as_slice)
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn total_objects(&self) -> usize {
        self.classes.iter().map(Vec::len).sum()
    }

    /// Check that there is at least one class and no class is empty.
    pub fn ensure_populated(&self) -> Result<(), ScoringError> {
        if self.classes.is_empty() {
            return Err(ScoringError::EmptyMatrix);
        }
        match self.classes.iter().position(Vec::is_empty) {
            Some(class_index) => Err(ScoringError::EmptyClass { class_index }),
            None => Ok(()),
        }
    }
}

/// Representative value of every bin, in ascending bin order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GradationList(Vec<BigDecimal>);

impl GradationList {
    pub fn new(values: Vec<BigDecimal>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[BigDecimal] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BigDecimal> {
        self.0.iter()
    }

    pub fn contains(&self, value: &BigDecimal) -> bool {
        self.0.contains(value)
    }

    /// Count the values of one class equal to each gradation.
    ///
    /// Values matching no gradation are not counted anywhere.
    pub fn counts(&self, class: &[BigDecimal]) -> Vec<usize> {
        self.0
            .iter()
            .map(|g| class.iter().filter(|v| *v == g).count())
            .collect()
    }
}

/// Per-class values after each has been replaced by its gradation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscretizedMatrix {
    classes: Vec<Vec<BigDecimal>>,
}

impl DiscretizedMatrix {
    pub fn new(classes: Vec<Vec<BigDecimal>>) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &[Vec<BigDecimal>] {
        &self.classes
    }

    pub fn class(&self, index: usize) -> Option<&[BigDecimal]> {
        self.classes.get(index).map(Vec::as_slice)
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Borrow every class as a slice.
    pub fn class_slices(&self) -> Vec<&[BigDecimal]> {
        self.classes.iter().map(Vec::as_slice).collect()
    }
}

/// Apply `score` to the base class paired with every other class.
///
/// Results keep the input class order with the base left out, so a
/// matrix of C classes yields C - 1 results.
pub fn pairwise<T, F>(
    matrix: &DiscretizedMatrix,
    base_class: usize,
    mut score: F,
) -> Result<Vec<T>, ScoringError>
where
    F: FnMut(&[BigDecimal], &[BigDecimal]) -> Result<T, ScoringError>,
{
    let base = matrix
        .class(base_class)
        .ok_or(ScoringError::BaseClassOutOfRange {
            base_class,
            class_count: matrix.num_classes(),
        })?;

    matrix
        .classes()
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != base_class)
        .map(|(_, other)| score(base, other))
        .collect()
}

/// Class numbers reported for pairwise results: every index except the base.
pub fn pairwise_class_numbers(class_count: usize, base_class: usize) -> Vec<usize> {
    (0..class_count).filter(|&i| i != base_class).collect()
}
