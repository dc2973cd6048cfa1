//! Digit-root reduction.
//!
//! `reduce(n)` is `n mod 9` with a zero remainder folded onto 9. The modulo is
//! Euclidean, so negative inputs land in the same 1..=9 range:
//! `reduce(-1) == 8`, `reduce(-9) == 9`.

use vortex_types::Digit;

#[must_use]
pub fn reduce(n: i64) -> Digit {
    Digit::from_residue(n.rem_euclid(9) as u8)
}

/// [`reduce`] over `i128`, for sums of two `i64` values.
#[must_use]
pub fn reduce_wide(n: i128) -> Digit {
    Digit::from_residue(n.rem_euclid(9) as u8)
}

/// Digit root by repeated decimal digit sums.
///
/// Agrees with [`reduce`] on every non-negative input, including `0 -> 9`.
#[must_use]
pub fn digit_sum_root(n: u64) -> Digit {
    if n == 0 {
        return Digit::NINE;
    }
    let mut n = n;
    while n > 9 {
        n = decimal_digit_sum(n);
    }
    Digit::from_residue(n as u8)
}

fn decimal_digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}
