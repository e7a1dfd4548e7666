//! Equal-width discretization of continuous feature values into gradations
//!
//! The range `[minimum, maximum]` is split into `amount` intervals of equal
//! width. Each interval is represented by its midpoint (its gradation) and
//! every raw value is replaced by the gradation of the interval holding it.
//! The raw matrix is left untouched; the discretized values live in a new
//! [`DiscretizedMatrix`].

use bigdecimal::{BigDecimal, Zero};

use super::error::ScoringError;
use super::matrix::{DiscretizedMatrix, FeatureMatrix, GradationList};
use super::precision::{count, Precision};
use super::range::ValueRange;

/// Interval boundaries and their gradations
#[derive(Debug, Clone, PartialEq)]
pub struct Binning {
    boundaries: Vec<BigDecimal>,
    gradations: GradationList,
}

impl Binning {
    /// Build the boundaries and gradations for `amount` equal-width bins.
    ///
    /// Boundaries start at `minimum` and advance by the rounded step while
    /// they do not exceed `maximum`, so accumulated rounding may leave the
    /// last boundary slightly short of the maximum. Values at or above the
    /// last boundary fall into the last gradation.
    pub fn build(
        maximum: &BigDecimal,
        minimum: &BigDecimal,
        amount: usize,
        precision: &Precision,
    ) -> Result<Self, ScoringError> {
        if maximum < minimum {
            return Err(ScoringError::DegenerateRange {
                maximum: maximum.clone(),
                minimum: minimum.clone(),
            });
        }
        if amount == 0 {
            return Err(ScoringError::ZeroBinCount);
        }

        let width = precision.sub(maximum, minimum);
        let step = precision
            .div(&width, &count(amount))
            .ok_or(ScoringError::ZeroBinCount)?;

        if step.is_zero() {
            log::debug!("zero-width range at {}, using a single gradation", maximum);
            return Ok(Self::single(maximum.clone()));
        }

        let mut boundaries = Vec::new();
        let mut current = minimum.clone();
        while current <= *maximum {
            let next = precision.add(&current, &step);
            if next <= current {
                return Err(ScoringError::StalledBoundary {
                    step,
                    boundary: current,
                    digits: precision.digits(),
                });
            }
            boundaries.push(current);
            current = next;
        }

        if boundaries.len() == 1 {
            let only = boundaries.swap_remove(0);
            return Ok(Self::single(only));
        }

        let two = BigDecimal::from(2);
        let gradations = boundaries
            .windows(2)
            .map(|pair| {
                let sum = precision.add(&pair[1], &pair[0]);
                precision.div(&sum, &two).unwrap_or(sum)
            })
            .collect();

        Ok(Self {
            boundaries,
            gradations: GradationList::new(gradations),
        })
    }

    fn single(value: BigDecimal) -> Self {
        Self {
            boundaries: vec![value.clone()],
            gradations: GradationList::new(vec![value]),
        }
    }

    pub fn boundaries(&self) -> &[BigDecimal] {
        &self.boundaries
    }

    pub fn gradations(&self) -> &GradationList {
        &self.gradations
    }

    /// Gradation of the interval `boundary[i] <= value < boundary[i + 1]`,
    /// or the last gradation when no interval holds the value.
    pub fn assign(&self, value: &BigDecimal) -> &BigDecimal {
        let gradations = self.gradations.as_slice();
        let last = gradations.len() - 1;
        if self.boundaries.len() < 2 {
            return &gradations[last];
        }
        let index = self
            .boundaries
            .windows(2)
            .position(|pair| pair[0] <= *value && *value < pair[1])
            .unwrap_or(last);
        &gradations[index]
    }
}

/// Result of discretizing one feature
#[derive(Debug, Clone, PartialEq)]
pub struct Discretization {
    pub binning: Binning,
    pub matrix: DiscretizedMatrix,
}

impl Discretization {
    pub fn gradations(&self) -> &GradationList {
        self.binning.gradations()
    }
}

/// Discretize every value of `matrix` into `amount` equal-width bins.
///
/// # Errors
/// - `EmptyMatrix` / `EmptyClass` for a matrix without values
/// - `DegenerateRange` when `maximum < minimum`
/// - `ZeroBinCount` when `amount == 0`
/// - `StalledBoundary` when the step vanishes at the working precision
pub fn discretize(
    matrix: &FeatureMatrix,
    maximum: &BigDecimal,
    minimum: &BigDecimal,
    amount: usize,
    precision: &Precision,
) -> Result<Discretization, ScoringError> {
    matrix.ensure_populated()?;
    let binning = Binning::build(maximum, minimum, amount, precision)?;

    let classes = matrix
        .classes()
        .iter()
        .map(|class| class.iter().map(|v| binning.assign(v).clone()).collect())
        .collect();

    Ok(Discretization {
        binning,
        matrix: DiscretizedMatrix::new(classes),
    })
}

/// [`discretize`] over a range produced by the range finder.
pub fn discretize_range(
    matrix: &FeatureMatrix,
    range: &ValueRange,
    amount: usize,
    precision: &Precision,
) -> Result<Discretization, ScoringError> {
    discretize(matrix, &range.maximum, &range.minimum, amount, precision)
}
