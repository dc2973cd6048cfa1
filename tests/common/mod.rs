//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Inputs spanning the sign boundary, multiples of nine, and the `i64` extremes.
pub const SAMPLE_INTEGERS: [i64; 14] = [
    i64::MIN,
    -1_000_000_007,
    -18,
    -9,
    -1,
    0,
    1,
    8,
    9,
    10,
    18,
    432,
    1_000_000_007,
    i64::MAX,
];

/// Write `content` to `config.toml` inside a fresh temp dir.
///
/// The returned `TempDir` must outlive any use of the path.
pub fn config_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    (dir, path)
}
