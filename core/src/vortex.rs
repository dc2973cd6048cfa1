//! Vortex digit and ratio of a pair of integers.

use serde::Serialize;
use vortex_types::{Digit, Ratio};

use crate::reduce::reduce_wide;

/// Result of [`vortex_pair`]: the digit root of `a + b` and `(a + b) / vortex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VortexPair {
    vortex: Digit,
    ratio: Ratio,
}

impl VortexPair {
    #[must_use]
    pub const fn vortex(&self) -> Digit {
        self.vortex
    }

    #[must_use]
    pub const fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// The sum the pair was derived from.
    #[must_use]
    pub const fn sum(&self) -> i128 {
        self.ratio.numerator()
    }
}

/// Sum is formed in `i128`, so every `i64` pair is defined.
/// `vortex_pair(0, 0)` yields vortex 9 and ratio 0.
#[must_use]
pub fn vortex_pair(a: i64, b: i64) -> VortexPair {
    let sum = i128::from(a) + i128::from(b);
    let vortex = reduce_wide(sum);
    VortexPair {
        vortex,
        ratio: Ratio::over_digit(sum, vortex),
    }
}
