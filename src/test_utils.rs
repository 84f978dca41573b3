//! Test utilities shared across test modules
//!
//! This module provides common helper functions for testing, avoiding
//! duplication across multiple test suites.

use crate::paths::Paths;
use tempfile::TempDir;

/// Create a Paths struct for testing using a temporary directory
///
/// Mimics the real ~/.ccswap/ and ~/.claude/ layout inside the temp dir.
pub fn setup_test_paths(temp_dir: &TempDir) -> Paths {
    Paths {
        base_dir: temp_dir.path().join(".ccswap"),
        profiles_dir: temp_dir.path().join(".ccswap/profiles"),
        state_file: temp_dir.path().join(".ccswap/state.json"),
        live_settings: temp_dir.path().join(".claude/settings.json"),
    }
}

/// Write the live settings document, creating its directory.
pub fn write_live(paths: &Paths, bytes: &[u8]) {
    let dir = paths.live_settings.parent().expect("live settings has a parent");
    std::fs::create_dir_all(dir).expect("create .claude dir");
    std::fs::write(&paths.live_settings, bytes).expect("write live settings");
}
