//! Shared fixtures for integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Directory holding test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture file as text.
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Copy a fixture into a fresh temp dir and return both.
///
/// Keep the `TempDir` alive for as long as the path is used.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, load_fixture(name)).expect("Failed to write fixture");
    (temp_dir, path)
}
