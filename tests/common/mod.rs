//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a reference file from raw lines and return it with its temp dir guard
pub fn write_reference_file(lines: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("reference.txt");

    let mut contents = lines.join("\n");
    if !lines.is_empty() {
        contents.push('\n');
    }
    fs::write(&path, contents).expect("Failed to write reference file");

    (temp_dir, path)
}

/// A small two-category reference file: ONSET (ka, ri) and CODA (zu, mo, ta)
pub fn sample_reference() -> (TempDir, PathBuf) {
    write_reference_file(&["ONSET", "ka,ri", "CODA", "zu,mo,ta"])
}
