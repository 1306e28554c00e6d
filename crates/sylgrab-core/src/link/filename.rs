//! Filename extraction from a raw href.

/// Returns the final path segment of a raw href, before URL resolution.
///
/// The href may be relative (`/docs/CSE101.pdf`) or absolute; query and
/// fragment are dropped first. `None` if the path has no usable segment.
pub fn filename_from_href(href: &str) -> Option<String> {
    let without_fragment = href.split('#').next().unwrap_or(href);
    let without_query = without_fragment.split('?').next().unwrap_or(without_fragment);
    let segment = without_query.rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
