//! Link extraction: anchor scanning, href filtering, and safe filename
//! derivation for the download store.

mod extract;
mod filename;
mod sanitize;

pub use extract::extract_pdf_links;
pub use filename::filename_from_href;
pub use sanitize::sanitize_filename;

use url::Url;

/// Fallback store name when an href yields nothing usable after sanitization.
pub(crate) const DEFAULT_FILENAME: &str = "download.pdf";

/// One matched hyperlink: where to GET it and what to call it locally.
/// Immutable once created by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfLink {
    /// Absolute URL, resolved against the page base.
    pub url: Url,
    /// Sanitized filename, derived from the original href's last segment.
    pub filename: String,
}
