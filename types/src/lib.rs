//! Core value types for Vortex.
//!
//! This crate contains pure value types with no IO and no dependencies beyond
//! serde. Every type here is `Copy` or cheaply cloneable, immutable once built,
//! and valid by construction.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod digit;
mod pattern;
mod ratio;
mod route;

pub use digit::{Digit, DigitError};
pub use pattern::{Family, Pattern, PatternError};
pub use ratio::{Ratio, RatioError};
pub use route::Route;
