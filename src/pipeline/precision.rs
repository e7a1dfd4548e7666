//! Fixed-precision decimal arithmetic.
//!
//! Every result produced by the core is rounded to a configurable number of
//! significant digits. The context is passed explicitly through the pipeline
//! instead of living in process-wide state.

use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, FromPrimitive, RoundingMode, ToPrimitive, Zero};
use serde::Serialize;

use super::error::ScoringError;

/// Default number of significant digits
pub const DEFAULT_PRECISION_DIGITS: u64 = 6;

/// Upper bound on significant digits accepted from configuration
pub const MAX_PRECISION_DIGITS: u64 = 100;

/// Significant-digit rounding context for decimal arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Precision {
    digits: u64,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            digits: DEFAULT_PRECISION_DIGITS,
        }
    }
}

impl Precision {
    pub fn new(digits: u64) -> Result<Self, ScoringError> {
        if digits == 0 || digits > MAX_PRECISION_DIGITS {
            return Err(ScoringError::InvalidPrecision {
                digits,
                max: MAX_PRECISION_DIGITS,
            });
        }
        Ok(Self { digits })
    }

    pub fn digits(&self) -> u64 {
        self.digits
    }

    /// Round a value to the nearest value with the context's significant
    /// digits, ties to even.
    ///
    /// Values that already fit are returned unchanged, so exact results are
    /// not padded with trailing zeros.
    pub fn round(&self, value: BigDecimal) -> BigDecimal {
        if value.is_zero() || value.digits() <= self.digits {
            return value;
        }
        match NonZeroU64::new(self.digits) {
            Some(digits) => value.with_precision_round(digits, RoundingMode::HalfEven),
            None => value,
        }
    }

    pub fn add(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(a + b)
    }

    pub fn sub(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(a - b)
    }

    pub fn mul(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(a * b)
    }

    /// Rounded quotient, or `None` for a zero divisor.
    pub fn div(&self, a: &BigDecimal, b: &BigDecimal) -> Option<BigDecimal> {
        if b.is_zero() {
            return None;
        }
        Some(self.round(a / b))
    }

    /// Quotient of two counts.
    pub fn ratio(&self, numerator: usize, denominator: usize) -> Option<BigDecimal> {
        self.div(&count(numerator), &count(denominator))
    }

    /// Logarithm of a positive value in the given base.
    ///
    /// Evaluated in binary floating point as `ln(value) / ln(base)` and
    /// converted back without rounding; the following multiplication applies
    /// the context.
    pub fn log(&self, value: &BigDecimal, base: f64) -> Result<BigDecimal, ScoringError> {
        value
            .to_f64()
            .map(|v| v.ln() / base.ln())
            .filter(|l| l.is_finite())
            .and_then(BigDecimal::from_f64)
            .ok_or_else(|| ScoringError::Unrepresentable(value.clone()))
    }
}

/// Exact decimal for an object count.
pub fn count(n: usize) -> BigDecimal {
    BigDecimal::from(n as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_is_six_digits() {
        assert_eq!(Precision::default().digits(), 6);
    }

    #[test]
    fn test_rejects_zero_digits() {
        assert!(matches!(
            Precision::new(0),
            Err(ScoringError::InvalidPrecision { digits: 0, .. })
        ));
        assert!(Precision::new(MAX_PRECISION_DIGITS + 1).is_err());
    }

    #[test]
    fn test_division_rounds_to_significant_digits() {
        let p = Precision::default();
        let third = p.div(&dec("1"), &dec("3")).unwrap();
        assert_eq!(third, dec("0.333333"));
    }

    #[test]
    fn test_exact_division_is_unchanged() {
        let p = Precision::default();
        assert_eq!(p.div(&dec("1"), &dec("4")).unwrap(), dec("0.25"));
        assert_eq!(p.ratio(3, 4).unwrap(), dec("0.75"));
    }

    #[test]
    fn test_division_by_zero_is_none() {
        let p = Precision::default();
        assert!(p.div(&dec("1"), &BigDecimal::zero()).is_none());
        assert!(p.ratio(0, 0).is_none());
    }

    #[test]
    fn test_log_base_two() {
        let p = Precision::default();
        assert_eq!(p.log(&dec("0.5"), 2.0).unwrap(), dec("-1"));
        assert_eq!(p.log(&dec("1"), 3.0).unwrap(), BigDecimal::zero());
    }

    #[test]
    fn test_log_of_zero_is_unrepresentable() {
        let p = Precision::default();
        assert!(matches!(
            p.log(&BigDecimal::zero(), 2.0),
            Err(ScoringError::Unrepresentable(_))
        ));
    }

    #[test]
    fn test_short_values_are_not_padded() {
        let p = Precision::default();
        assert_eq!(p.add(&BigDecimal::zero(), &dec("1")).to_string(), "1");
        assert_eq!(p.mul(&dec("0.5"), &dec("0.5")).to_string(), "0.25");
    }

    #[test]
    fn test_negative_values_round_to_nearest() {
        let p = Precision::default();
        assert_eq!(p.div(&dec("-2"), &dec("3")).unwrap(), dec("-0.666667"));
        assert_eq!(p.round(dec("-0.66666666666")), dec("-0.666667"));
        assert_eq!(p.round(dec("-1.2345649")), dec("-1.23456"));
    }

    #[test]
    fn test_ties_round_to_even() {
        let p = Precision::default();
        assert_eq!(p.round(dec("1234565")), dec("1234560"));
        assert_eq!(p.round(dec("1234575")), dec("1234580"));
        assert_eq!(p.round(dec("0.12345650")), dec("0.123456"));
        assert_eq!(p.round(dec("0.123456501")), dec("0.123457"));
    }

    #[test]
    fn test_addition_loses_digits_beyond_precision() {
        let p = Precision::default();
        let sum = p.add(&dec("1000000"), &dec("0.1"));
        assert_eq!(sum, dec("1000000"));
    }
}
