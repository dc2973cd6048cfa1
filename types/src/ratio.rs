//! Exact integer ratios with a non-zero denominator.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Digit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatioError {
    #[error("ratio denominator must not be zero")]
    ZeroDenominator,
}

#[derive(Deserialize)]
struct RawRatio {
    numerator: i128,
    denominator: i128,
}

/// A `numerator / denominator` pair whose denominator is never zero.
///
/// The pair is stored as given; no normalisation to lowest terms happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRatio")]
pub struct Ratio {
    numerator: i128,
    denominator: i128,
}

impl TryFrom<RawRatio> for Ratio {
    type Error = RatioError;

    fn try_from(raw: RawRatio) -> Result<Self, Self::Error> {
        Self::new(raw.numerator, raw.denominator)
    }
}

impl Ratio {
    pub fn new(numerator: i128, denominator: i128) -> Result<Self, RatioError> {
        if denominator == 0 {
            return Err(RatioError::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Divide by a digit. Infallible, since a digit is never zero.
    #[must_use]
    pub fn over_digit(numerator: i128, digit: Digit) -> Self {
        Self {
            numerator,
            denominator: i128::from(digit),
        }
    }

    #[must_use]
    pub const fn numerator(self) -> i128 {
        self.numerator
    }

    #[must_use]
    pub const fn denominator(self) -> i128 {
        self.denominator
    }

    /// Floating-point quotient.
    #[must_use]
    pub fn value(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// True when the denominator divides the numerator.
    #[must_use]
    pub fn is_whole(self) -> bool {
        // `i128::MIN % -1` overflows but is still whole.
        self.numerator
            .checked_rem(self.denominator)
            .is_none_or(|rem| rem == 0)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
