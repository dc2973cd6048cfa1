//! Named digit cycles.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::Digit;

/// A fixed, named, ordered sequence of digits.
///
/// Patterns are compile-time data; there is no way to build one from
/// runtime input. Membership ignores order and duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pattern {
    name: &'static str,
    digits: &'static [Digit],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unknown pattern '{0}'")]
    Unknown(String),
}

impl Pattern {
    #[must_use]
    pub const fn new(name: &'static str, digits: &'static [Digit]) -> Self {
        assert!(!name.is_empty(), "pattern name must not be empty");
        assert!(!digits.is_empty(), "pattern must contain at least one digit");
        Self { name, digits }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn digits(&self) -> &'static [Digit] {
        self.digits
    }

    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.digits.contains(&digit)
    }
}

impl AsRef<[Digit]> for Pattern {
    fn as_ref(&self) -> &[Digit] {
        self.digits
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [", self.name)?;
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{digit}")?;
        }
        f.write_str("]")
    }
}

/// Which of the three digit families a reduced value falls into.
///
/// The doubling cycle visits 1, 2, 4, 8, 7, 5; 3 and 6 alternate with each
/// other; 9 maps only to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Cycle,
    Triad,
    Axis,
}

impl Family {
    #[must_use]
    pub const fn of(digit: Digit) -> Self {
        match digit.get() {
            9 => Family::Axis,
            3 | 6 => Family::Triad,
            _ => Family::Cycle,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Family::Cycle => "cycle",
            Family::Triad => "triad",
            Family::Axis => "axis",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
