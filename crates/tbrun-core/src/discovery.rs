//! Recursive HDL source file discovery.
//!
//! A file is kept when its name ends with one of the accepted extensions,
//! does not contain the ignore substring anywhere, and is not on the
//! explicit exclusion list. Order follows the directory traversal.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// All HDL source extensions handled by the simulators.
pub const HDL_EXTENSIONS: &[&str] = &[".vhd", ".vhdl", ".v"];

/// VHDL-only subset used by the run flow.
pub const VHDL_EXTENSIONS: &[&str] = &[".vhd", ".vhdl"];

/// Editor backup marker. Files containing it are never picked up.
pub const DEFAULT_IGNORE_PATTERN: &str = "~";

/// Walk `root` and collect matching HDL files.
///
/// Unreadable directories propagate as errors rather than being skipped.
pub fn discover_hdl_files(
    root: &Path,
    extensions: &[&str],
    ignore_pattern: &str,
    excluded: &[String],
) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry
            .with_context(|| format!("failed to walk directory tree under {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !extensions.iter().any(|ext| name.ends_with(ext)) {
            continue;
        }
        if !ignore_pattern.is_empty() && name.contains(ignore_pattern) {
            continue;
        }
        if excluded.iter().any(|ex| ex.as_str() == name.as_ref()) {
            continue;
        }
        found.push(entry.into_path());
    }
    Ok(found)
}
