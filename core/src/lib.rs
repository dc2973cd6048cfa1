//! Core arithmetic for Vortex.
//!
//! Every function in this crate is pure and total: same inputs, same
//! outputs, no panics, no shared state.
//!
//! - **`reduce`**: mod-9 digit roots (0 folds to 9, Euclidean for negatives)
//! - **`vortex`**: vortex digit and ratio of a pair
//! - **`patterns`**: fixed pattern registry, membership, families
//! - **`router`**: divisibility routing with a typed "no route"

pub mod patterns;
pub mod reduce;
pub mod router;
pub mod vortex;

pub use patterns::{
    CORE_CYCLE, DOUBLING, HALVING, TRIAD, classify, doubling_sequence, find, is_member, lookup,
    patterns,
};
pub use reduce::{digit_sum_root, reduce, reduce_wide};
pub use router::route;
pub use vortex::{VortexPair, vortex_pair};

pub use vortex_types::{Digit, Family, Pattern, PatternError, Ratio, Route};
