//! Fixed pattern registry and membership.
//!
//! The registry is compile-time data. There is no registration API.

use vortex_types::{Digit, Family, Pattern, PatternError};

use crate::reduce::reduce;

const CORE_CYCLE_DIGITS: [Digit; 6] = [
    Digit::literal(1),
    Digit::literal(2),
    Digit::literal(4),
    Digit::literal(8),
    Digit::literal(7),
    Digit::literal(5),
];
const DOUBLING_DIGITS: [Digit; 4] = [
    Digit::literal(1),
    Digit::literal(2),
    Digit::literal(4),
    Digit::literal(8),
];
const HALVING_DIGITS: [Digit; 4] = [
    Digit::literal(8),
    Digit::literal(4),
    Digit::literal(2),
    Digit::literal(1),
];
const TRIAD_DIGITS: [Digit; 3] = [Digit::literal(3), Digit::literal(6), Digit::literal(9)];

pub const CORE_CYCLE: Pattern = Pattern::new("core-cycle", &CORE_CYCLE_DIGITS);
pub const DOUBLING: Pattern = Pattern::new("doubling", &DOUBLING_DIGITS);
pub const HALVING: Pattern = Pattern::new("halving", &HALVING_DIGITS);
pub const TRIAD: Pattern = Pattern::new("triad", &TRIAD_DIGITS);

static REGISTRY: [Pattern; 4] = [CORE_CYCLE, DOUBLING, HALVING, TRIAD];

/// Every registered pattern, in registry order.
#[must_use]
pub fn patterns() -> &'static [Pattern] {
    &REGISTRY
}

/// Look up a pattern by name.
///
/// Case-insensitive; `_` and spaces are accepted in place of `-`.
#[must_use]
pub fn find(name: &str) -> Option<&'static Pattern> {
    let wanted = normalize_name(name);
    REGISTRY.iter().find(|pattern| pattern.name() == wanted)
}

pub fn lookup(name: &str) -> Result<&'static Pattern, PatternError> {
    find(name).ok_or_else(|| PatternError::Unknown(name.trim().to_string()))
}

fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Reduce `n` and test whether the digit appears in `pattern`.
///
/// Accepts a registered [`Pattern`] or any digit sequence built at runtime.
#[must_use]
pub fn is_member<P>(n: i64, pattern: &P) -> bool
where
    P: AsRef<[Digit]> + ?Sized,
{
    pattern.as_ref().contains(&reduce(n))
}

#[must_use]
pub fn classify(n: i64) -> Family {
    Family::of(reduce(n))
}

/// Digit roots of `seed, 2*seed, 4*seed, ...`, `len` terms long.
///
/// Doubling is done on the digit root, which the mod-9 residue preserves, so
/// no term can overflow. The result holds `len` digits and grows as
/// they are produced, so memory is linear in `len`. The sequence repeats with
/// period 1, 2 or 6; callers taking `len` from input should bound it.
#[must_use]
pub fn doubling_sequence(seed: i64, len: usize) -> Vec<Digit> {
    std::iter::successors(Some(reduce(seed)), |digit| Some(digit.doubled()))
        .take(len)
        .collect()
}
