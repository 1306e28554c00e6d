//! Anchor scanning and filtering.

use super::{filename_from_href, sanitize_filename, PdfLink, DEFAULT_FILENAME};
use scraper::{Html, Selector};
use url::Url;

/// True if a raw href passes the filter: case-insensitively ends with `.pdf`
/// and contains `keyword`.
fn href_matches(href: &str, keyword: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    lower.ends_with(".pdf") && lower.contains(keyword)
}

/// Derives the store filename for a matched href. Falls back to a fixed name
/// when the sanitized last segment is empty or a reserved dot name.
fn derive_filename(href: &str) -> String {
    let raw = match filename_from_href(href) {
        Some(seg) => seg,
        None => return DEFAULT_FILENAME.to_string(),
    };
    let sanitized = sanitize_filename(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}

/// Scans `html` for anchors whose href matches the filter and returns them in
/// document order, resolved against `base`.
///
/// Purely in-memory; no network access. Hrefs that do not resolve against the
/// base URL are skipped. Distinct hrefs can sanitize to the same filename;
/// the store's presence check decides who wins (known limitation).
pub fn extract_pdf_links(html: &str, base: &Url, keyword: &str) -> Vec<PdfLink> {
    let keyword = keyword.to_ascii_lowercase();
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").expect("static selector");

    let mut links = Vec::new();
    for element in document.select(&anchors) {
        let href = match element.value().attr("href") {
            Some(h) => h,
            None => continue,
        };
        if !href_matches(href, &keyword) {
            continue;
        }
        let url = match base.join(href) {
            Ok(u) => u,
            Err(err) => {
                tracing::warn!("skipping unresolvable href {href:?}: {err}");
                continue;
            }
        };
        links.push(PdfLink {
            url,
            filename: derive_filename(href),
        });
    }
    links
}
