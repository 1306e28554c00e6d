//! Zip bundling of the download store.

use crate::store;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Logical top-level folder inside the archive all members land under.
pub const ARCHIVE_ROOT: &str = "cse_syllabus_pdfs";

/// Default archive filename the CLI writes.
pub const ARCHIVE_NAME: &str = "cse_syllabus_pdfs.zip";

/// Bundle every `.pdf` in `dir` into an in-memory zip.
///
/// Archives the whole store as it is at call time, including files left by
/// prior runs. Members are deflated and placed under [`ARCHIVE_ROOT`], in
/// sorted filename order.
pub fn zip_store(dir: &Path) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in store::list_pdfs(dir)? {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow!("non-UTF-8 filename in store: {}", path.display()))?;
        let body = fs::read(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        writer.start_file(format!("{ARCHIVE_ROOT}/{name}"), options)?;
        writer.write_all(&body)?;
    }

    let cursor = writer.finish().context("failed to finalize zip archive")?;
    Ok(cursor.into_inner())
}
