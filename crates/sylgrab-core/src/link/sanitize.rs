//! Filename sanitization for the download store.

/// Strips every character outside `[A-Za-z0-9_.-]` from a candidate filename.
///
/// Matching is by removal, not replacement: `"CSE 101 (v2).pdf"` becomes
/// `"CSE101v2.pdf"`. May return an empty string; callers fall back to a
/// default name in that case.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect()
}
