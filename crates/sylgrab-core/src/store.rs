//! The local file store: one flat directory of PDFs keyed by filename.
//!
//! Append-only across runs; a file that is already present is never
//! re-written, which makes repeated runs idempotent.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Create the store directory if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create download dir {}", dir.display()))
}

/// True if the store already holds `filename`.
pub fn contains(dir: &Path, filename: &str) -> bool {
    dir.join(filename).exists()
}

/// Paths of all `.pdf` files directly in the store, sorted by filename.
///
/// Sorted rather than readdir order so archive contents and status listings
/// are deterministic.
pub fn list_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if path.is_file() && is_pdf {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
