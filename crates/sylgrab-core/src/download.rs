//! Per-link download: one GET, one presence-checked write into the store.

use crate::fetch;
use crate::link::PdfLink;
use crate::store;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What happened to one link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    /// Fetched and written to the store.
    Downloaded,
    /// The store already held this filename; nothing was written.
    AlreadyExists,
    /// Transport failure or non-2xx status; nothing was written.
    Failed,
}

/// Per-link result, consumed by the presenter and the summary.
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    pub filename: String,
    pub local_path: PathBuf,
    pub status: DownloadStatus,
    /// Human-readable detail line (error text for `Failed`).
    pub message: String,
}

impl DownloadOutcome {
    pub fn succeeded(&self) -> bool {
        !matches!(self.status, DownloadStatus::Failed)
    }
}

/// Write `body` under `filename` unless the store already holds that name.
///
/// Presence alone decides; existing bytes are never compared or replaced, so
/// calling this twice with the same name leaves the first write's content in
/// place. Called after the full body is in memory, so a created file is
/// always complete.
pub fn store_body(dir: &Path, filename: &str, body: &[u8]) -> std::io::Result<DownloadOutcome> {
    let local_path = dir.join(filename);
    if store::contains(dir, filename) {
        return Ok(DownloadOutcome {
            filename: filename.to_string(),
            local_path,
            status: DownloadStatus::AlreadyExists,
            message: format!("Already exists: {filename}"),
        });
    }
    fs::write(&local_path, body)?;
    Ok(DownloadOutcome {
        filename: filename.to_string(),
        local_path,
        status: DownloadStatus::Downloaded,
        message: format!("Downloaded: {filename}"),
    })
}

/// GET one link and store the body.
///
/// Failures are folded into the outcome rather than propagated: one bad file
/// must not abort the remaining downloads.
pub fn download(link: &PdfLink, dir: &Path, timeout: Duration) -> DownloadOutcome {
    let failed = |detail: String| DownloadOutcome {
        filename: link.filename.clone(),
        local_path: dir.join(&link.filename),
        status: DownloadStatus::Failed,
        message: detail,
    };

    let body: Vec<u8> = match fetch::fetch_bytes(link.url.as_str(), timeout) {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!("GET {} failed: {err}", link.url);
            return failed(format!("Error downloading {}: {err}", link.url));
        }
    };

    match store_body(dir, &link.filename, &body) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::warn!("write {} failed: {err}", link.filename);
            failed(format!("Error writing {}: {err}", link.filename))
        }
    }
}
