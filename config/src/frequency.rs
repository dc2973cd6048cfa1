//! The base-frequency constants table.
//!
//! Raw TOML values are resolved into [`FrequencyTable`] at the parse
//! boundary. Holding a `FrequencyTable` means the base is non-zero and the
//! multipliers are non-empty, non-zero and strictly ascending.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vortex_core::{reduce, reduce_wide};
use vortex_types::Digit;

pub const DEFAULT_BASE: u32 = 432;
pub const DEFAULT_MULTIPLIERS: [u32; 7] = [1, 2, 3, 4, 6, 8, 9];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrequencyError {
    #[error("base frequency must not be zero")]
    ZeroBase,
    #[error("multipliers must not be empty")]
    EmptyMultipliers,
    #[error("multipliers must be non-zero and strictly ascending, got {0:?}")]
    UnsortedMultipliers(Vec<u32>),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFrequencyTable {
    base: Option<u32>,
    multipliers: Option<Vec<u32>>,
}

/// Validated base frequency and its harmonic multipliers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFrequencyTable")]
pub struct FrequencyTable {
    base: u32,
    multipliers: Vec<u32>,
}

impl TryFrom<RawFrequencyTable> for FrequencyTable {
    type Error = FrequencyError;

    fn try_from(raw: RawFrequencyTable) -> Result<Self, Self::Error> {
        Self::new(
            raw.base.unwrap_or(DEFAULT_BASE),
            raw.multipliers.unwrap_or_else(|| DEFAULT_MULTIPLIERS.to_vec()),
        )
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            multipliers: DEFAULT_MULTIPLIERS.to_vec(),
        }
    }
}

impl FrequencyTable {
    pub fn new(base: u32, multipliers: Vec<u32>) -> Result<Self, FrequencyError> {
        if base == 0 {
            return Err(FrequencyError::ZeroBase);
        }
        if multipliers.is_empty() {
            return Err(FrequencyError::EmptyMultipliers);
        }
        let ascending = multipliers[0] > 0 && multipliers.windows(2).all(|w| w[0] < w[1]);
        if !ascending {
            return Err(FrequencyError::UnsortedMultipliers(multipliers));
        }
        Ok(Self { base, multipliers })
    }

    #[must_use]
    pub const fn base(&self) -> u32 {
        self.base
    }

    #[must_use]
    pub fn multipliers(&self) -> &[u32] {
        &self.multipliers
    }

    #[must_use]
    pub fn base_root(&self) -> Digit {
        reduce(i64::from(self.base))
    }

    /// `base * k`. `None` for `k == 0`.
    #[must_use]
    pub fn harmonic(&self, k: u32) -> Option<u64> {
        (k > 0).then(|| u64::from(self.base) * u64::from(k))
    }

    /// `base * k` for each configured multiplier, ascending.
    #[must_use]
    pub fn harmonics(&self) -> Vec<u64> {
        self.multipliers
            .iter()
            .map(|&k| u64::from(self.base) * u64::from(k))
            .collect()
    }

    /// Each harmonic paired with its digit root.
    #[must_use]
    pub fn roots(&self) -> Vec<(u64, Digit)> {
        self.harmonics()
            .into_iter()
            .map(|h| (h, reduce_wide(i128::from(h))))
            .collect()
    }

    /// `base * 2^i` for `i in 0..count`, stopping early on overflow.
    #[must_use]
    pub fn octaves(&self, count: usize) -> Vec<u64> {
        let base = u64::from(self.base);
        (0..count)
            .map_while(|i| {
                let shift = u32::try_from(i).ok()?;
                2_u64.checked_pow(shift)?.checked_mul(base)
            })
            .collect()
    }
}
