//! Single blocking HTTP GET via the curl crate (libcurl Easy).
//!
//! The whole body is buffered in memory before anything touches disk; files
//! involved here are small course PDFs, not ISO images.

use crate::error::FetchError;
use std::time::Duration;

/// GET `url` and return the full response body.
///
/// Follows redirects. A non-2xx final status is an error; nothing is retried.
pub fn fetch_bytes(url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(timeout)?;
    easy.timeout(timeout)?;
    easy.useragent("sylgrab/0.1")?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Status(code));
    }

    Ok(body)
}

/// GET `url` and decode the body as text (lossily; markup with stray bytes
/// still parses).
pub fn fetch_text(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let body = fetch_bytes(url, timeout)?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}
