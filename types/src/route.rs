//! Outcome of divisibility routing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a value was routed.
///
/// Replaces the bare `-1` "no route" marker: `Divided(-1)` and `NoRoute`
/// are distinct values here even though [`Route::to_sentinel`] maps both to `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Route {
    /// Divisor was zero; value is `(n + m) mod 10`.
    Wrapped(i64),
    /// Divisor divided `n` evenly; value is the quotient.
    Divided(i64),
    NoRoute,
}

impl Route {
    /// Legacy integer encoding of [`Route::NoRoute`].
    pub const NO_ROUTE_SENTINEL: i64 = -1;

    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Route::Wrapped(v) | Route::Divided(v) => Some(v),
            Route::NoRoute => None,
        }
    }

    #[must_use]
    pub const fn is_routed(self) -> bool {
        !matches!(self, Route::NoRoute)
    }

    /// Collapse to the legacy single-integer form.
    ///
    /// Lossy: a genuine quotient of `-1` is indistinguishable from no route.
    #[must_use]
    pub const fn to_sentinel(self) -> i64 {
        match self.value() {
            Some(v) => v,
            None => Self::NO_ROUTE_SENTINEL,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Wrapped(v) | Route::Divided(v) => write!(f, "{v}"),
            Route::NoRoute => f.write_str("no route"),
        }
    }
}
