//! Split a page URL into protocol, host, directory and filename.

use super::{Protocol, UrlComponents};

/// Why a line from the input could not be turned into [`UrlComponents`].
/// Both variants are per-URL: the caller skips the URL and carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecomposeError {
    /// The URL does not start with exactly `http://` or `https://`.
    #[error("protocol not found (expected http:// or https://)")]
    UnknownProtocol,
    /// The prefix is fine but the rest cannot be split (e.g. empty host).
    #[error("malformed URL: {0}")]
    MalformedUrl(&'static str),
}

/// Decomposes `url` into its components.
///
/// The protocol prefix match is exact and case-sensitive. The path is split
/// at the last `/` into directory and filename, and the part before it at
/// the first `/` into host and directory, so
/// `components.to_url() == url` for any URL with a path.
///
/// A URL without any `/` after the host (`http://example.com`) is the root
/// page: directory `/`, empty filename.
///
/// # Examples
///
/// - `"http://example.com/page.php"` → (`http://`, `example.com`, `/`, `page.php`)
/// - `"https://example.com/a/b/page.tar.gz"` → (`https://`, `example.com`, `/a/b/`, `page.tar.gz`)
pub fn decompose(url: &str) -> Result<UrlComponents, DecomposeError> {
    let (protocol, remainder) = if let Some(rest) = url.strip_prefix(Protocol::Http.prefix()) {
        (Protocol::Http, rest)
    } else if let Some(rest) = url.strip_prefix(Protocol::Https.prefix()) {
        (Protocol::Https, rest)
    } else {
        return Err(DecomposeError::UnknownProtocol);
    };

    let (host, directory, filename) = match remainder.rfind('/') {
        Some(last) => {
            let host_and_dir = &remainder[..=last];
            let filename = &remainder[last + 1..];
            // host_and_dir ends with '/', so there is always a first slash.
            let first = host_and_dir.find('/').unwrap_or(last);
            (&host_and_dir[..first], &host_and_dir[first..], filename)
        }
        None => (remainder, "/", ""),
    };

    if host.is_empty() {
        return Err(DecomposeError::MalformedUrl("empty host"));
    }

    Ok(UrlComponents {
        protocol,
        host: host.to_string(),
        directory: directory.to_string(),
        filename: filename.to_string(),
    })
}
