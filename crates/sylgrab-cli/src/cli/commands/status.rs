//! `sylgrab status` – list the contents of the download store.

use anyhow::Result;
use std::path::Path;
use sylgrab_core::store;

pub fn run_status(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        println!("No download store at {}.", dir.display());
        return Ok(());
    }

    let paths = store::list_pdfs(dir)?;
    if paths.is_empty() {
        println!("Store {} is empty.", dir.display());
        return Ok(());
    }

    println!("{:<10} {}", "SIZE", "FILE");
    for path in &paths {
        let size = path
            .metadata()
            .map(|m| m.len().to_string())
            .unwrap_or_else(|_| "-".to_string());
        println!(
            "{:<10} {}",
            size,
            path.file_name().unwrap_or_default().to_string_lossy()
        );
    }
    println!("{} file(s) in {}.", paths.len(), dir.display());
    Ok(())
}
