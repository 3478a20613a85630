//! Test fixture utilities

use std::path::{Path, PathBuf};

/// Directory holding the fixture CSV files
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_fixtures")
}

/// Copy fixtures into `dir` under their own names
#[allow(dead_code)]
pub fn copy_fixtures(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::copy(fixture_dir().join(name), dir.join(name))
            .unwrap_or_else(|_| panic!("Failed to copy fixture: {}", name));
    }
}
