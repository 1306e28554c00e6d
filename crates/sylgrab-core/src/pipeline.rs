//! The pipeline itself: fetch → extract → download loop → archive.
//!
//! One synchronous, blocking pass per invocation. Interface bindings (the
//! CLI today) call [`run_pipeline`] and render the report; nothing here
//! prints or reads input.

use crate::archive;
use crate::config::SylgrabConfig;
use crate::download::{self, DownloadOutcome};
use crate::error::PipelineError;
use crate::fetch;
use crate::link::{self, PdfLink};
use crate::store;
use anyhow::Context;
use std::thread;
use std::time::Duration;
use url::Url;

/// Progress callbacks for the interface binding, emitted as the run advances.
#[derive(Debug)]
pub enum ProgressEvent<'a> {
    /// The page was fetched and scanned; downloads are about to start.
    LinksFound { count: usize },
    /// One download finished (whatever its status). `index` is 0-based.
    FileDone {
        index: usize,
        total: usize,
        outcome: &'a DownloadOutcome,
    },
}

/// Everything one run produced.
#[derive(Debug)]
pub struct PipelineReport {
    /// Links that matched the filter, in document order.
    pub links: Vec<PdfLink>,
    /// One outcome per link, same order.
    pub outcomes: Vec<DownloadOutcome>,
    /// Finished zip of the whole store; `None` if no download succeeded.
    pub archive: Option<Vec<u8>>,
}

impl PipelineReport {
    /// Outcomes whose file is present in the store (downloaded now or before).
    pub fn available(&self) -> impl Iterator<Item = &DownloadOutcome> {
        self.outcomes.iter().filter(|o| o.succeeded())
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.succeeded()).count()
    }
}

/// Run the whole pipeline once.
///
/// Halts with an error only for the page fetch failing or nothing matching;
/// per-file failures are folded into the report. Downloads run strictly in
/// sequence with a deliberate short pause between iterations so the progress
/// line visibly updates.
pub fn run_pipeline(
    cfg: &SylgrabConfig,
    mut progress: impl FnMut(ProgressEvent<'_>),
) -> Result<PipelineReport, PipelineError> {
    let timeout = Duration::from_secs(cfg.timeout_secs);
    let base = Url::parse(&cfg.source_url)
        .with_context(|| format!("invalid source URL {:?}", cfg.source_url))?;

    store::ensure_dir(&cfg.download_dir)?;

    tracing::info!("fetching {}", base);
    let html = fetch::fetch_text(base.as_str(), timeout).map_err(|source| {
        PipelineError::Fetch {
            url: base.to_string(),
            source,
        }
    })?;

    let links = link::extract_pdf_links(&html, &base, &cfg.keyword);
    if links.is_empty() {
        return Err(PipelineError::NoMatchingLinks);
    }
    tracing::info!("found {} matching links", links.len());
    progress(ProgressEvent::LinksFound { count: links.len() });

    let total = links.len();
    let mut outcomes = Vec::with_capacity(total);
    for (index, link) in links.iter().enumerate() {
        let outcome = download::download(link, &cfg.download_dir, timeout);
        progress(ProgressEvent::FileDone {
            index,
            total,
            outcome: &outcome,
        });
        outcomes.push(outcome);
        if index + 1 < total && cfg.pause_millis > 0 {
            thread::sleep(Duration::from_millis(cfg.pause_millis));
        }
    }

    let any_succeeded = outcomes.iter().any(|o| o.succeeded());
    let archive = if any_succeeded {
        Some(archive::zip_store(&cfg.download_dir)?)
    } else {
        None
    };

    Ok(PipelineReport {
        links,
        outcomes,
        archive,
    })
}
