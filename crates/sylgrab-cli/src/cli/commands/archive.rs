//! `sylgrab archive` – bundle the existing store without fetching.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use sylgrab_core::archive::{zip_store, ARCHIVE_NAME};
use sylgrab_core::store;

pub fn run_archive(dir: &Path, archive_out: Option<&Path>) -> Result<()> {
    if !dir.is_dir() {
        println!("No download store at {}; run `sylgrab run` first.", dir.display());
        return Ok(());
    }
    let count = store::list_pdfs(dir)?.len();
    if count == 0 {
        println!("Store {} holds no PDFs; nothing to archive.", dir.display());
        return Ok(());
    }

    let bytes = zip_store(dir)?;
    let out = archive_out.unwrap_or_else(|| Path::new(ARCHIVE_NAME));
    fs::write(out, &bytes).with_context(|| format!("failed to write archive {}", out.display()))?;
    println!(
        "Archived {count} file(s) from {} to {} ({} bytes).",
        dir.display(),
        out.display(),
        bytes.len()
    );
    Ok(())
}
