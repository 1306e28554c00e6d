//! `sylgrab run` – the single trigger action: fetch, extract, download, bundle.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use sylgrab_core::archive::ARCHIVE_NAME;
use sylgrab_core::config::SylgrabConfig;
use sylgrab_core::download::DownloadStatus;
use sylgrab_core::error::PipelineError;
use sylgrab_core::pipeline::{run_pipeline, PipelineReport, ProgressEvent};

pub fn run_scrape(cfg: &SylgrabConfig, no_archive: bool, archive_out: Option<&Path>) -> Result<()> {
    println!("Fetching {} ...", cfg.source_url);

    let report = match run_pipeline(cfg, render_progress) {
        Ok(report) => report,
        Err(PipelineError::NoMatchingLinks) => {
            println!("Warning: no matching PDF links found on the page.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    render_summary(&report);

    if no_archive {
        return Ok(());
    }
    if let Some(bytes) = &report.archive {
        let out = archive_out.unwrap_or_else(|| Path::new(ARCHIVE_NAME));
        fs::write(out, bytes)
            .with_context(|| format!("failed to write archive {}", out.display()))?;
        println!("Archive written to {} ({} bytes).", out.display(), bytes.len());
    }
    Ok(())
}

fn render_progress(event: ProgressEvent<'_>) {
    match event {
        ProgressEvent::LinksFound { count } => {
            println!("Found {count} matching PDF link(s).");
        }
        ProgressEvent::FileDone {
            index,
            total,
            outcome,
        } => {
            let percent = (index + 1) * 100 / total;
            println!("[{percent:>3}%] {}", outcome.message);
        }
    }
}

fn render_summary(report: &PipelineReport) {
    let mut downloaded = 0usize;
    let mut existing = 0usize;
    for outcome in &report.outcomes {
        match outcome.status {
            DownloadStatus::Downloaded => downloaded += 1,
            DownloadStatus::AlreadyExists => existing += 1,
            DownloadStatus::Failed => {}
        }
    }
    println!(
        "Done: {downloaded} downloaded, {existing} already present, {} failed.",
        report.failed_count()
    );

    let available: Vec<_> = report.available().collect();
    if !available.is_empty() {
        println!("Available files:");
        for outcome in available {
            println!("  {}", outcome.local_path.display());
        }
    }
}
