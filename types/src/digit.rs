//! The `Digit` proof type.
//!
//! A `Digit` is the result of digit-root reduction: an integer in 1..=9.
//! Zero is never representable; a residue of 0 is folded onto 9.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An integer guaranteed to lie in `1..=9`.
///
/// # Invariants
///
/// - `1 <= value <= 9`
/// - There is no public constructor that skips validation
///
/// # Serde
///
/// Serializes as a bare integer. Deserialization fails for values outside
/// `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigitError {
    #[error("digit must be in 1..=9, got {0}")]
    OutOfRange(i64),
}

impl Digit {
    pub const ONE: Digit = Digit(1);
    pub const NINE: Digit = Digit(9);

    pub fn new(value: i64) -> Result<Self, DigitError> {
        if (1..=9).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }

    /// Compile-time checked digit literal for constant tables.
    #[must_use]
    pub const fn literal(value: u8) -> Self {
        assert!(value >= 1 && value <= 9, "digit literal must be in 1..=9");
        Self(value)
    }

    /// Fold a non-negative residue onto `1..=9`, mapping multiples of 9 to 9.
    #[must_use]
    pub const fn from_residue(residue: u8) -> Self {
        match residue % 9 {
            0 => Self(9),
            r => Self(r),
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Digit root of twice this digit.
    #[must_use]
    pub const fn doubled(self) -> Self {
        Self::from_residue(self.0 * 2)
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Digit> for u8 {
    fn from(value: Digit) -> Self {
        value.0
    }
}

impl From<Digit> for i64 {
    fn from(value: Digit) -> Self {
        i64::from(value.0)
    }
}

impl From<Digit> for i128 {
    fn from(value: Digit) -> Self {
        i128::from(value.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
