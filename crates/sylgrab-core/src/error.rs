//! Error taxonomy for the pipeline.
//!
//! Classified so callers can tell "page unreachable" and "nothing matched"
//! apart from per-file failures, which never abort the run.

use thiserror::Error;

/// Failure of a single HTTP GET (page fetch or one file download).
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl reported an error (DNS, connect, timeout, TLS, ...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// The response completed with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u32),
}

/// Errors that halt the pipeline before any per-file work is reported.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source page could not be fetched.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
    /// The page fetched fine but no anchor matched the filter.
    #[error("no matching PDF links found on the page")]
    NoMatchingLinks,
    /// Store setup or archive construction failed.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
