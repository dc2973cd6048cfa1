//! Divisibility routing.

use vortex_types::Route;

/// Route `n` by divisor `d`, with `m` as the wrap offset.
///
/// - `d == 0`: [`Route::Wrapped`] with `(n + m) mod 10` (Euclidean, so 0..=9)
/// - `d` divides `n`: [`Route::Divided`] with `n / d`
/// - otherwise: [`Route::NoRoute`]
///
/// `route(i64::MIN, -1, _)` is [`Route::NoRoute`]: the quotient does not fit `i64`.
#[must_use]
pub fn route(n: i64, d: i64, m: i64) -> Route {
    if d == 0 {
        let wrapped = (i128::from(n) + i128::from(m)).rem_euclid(10);
        return Route::Wrapped(wrapped as i64);
    }

    match (n.checked_rem(d), n.checked_div(d)) {
        (Some(0), Some(quotient)) => Route::Divided(quotient),
        _ => Route::NoRoute,
    }
}
