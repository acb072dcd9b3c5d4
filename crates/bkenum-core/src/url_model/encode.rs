//! Percent-encoding of request paths.

/// Percent-encodes a raw request path, keeping `/` separators.
///
/// Every byte other than ASCII alphanumerics, `-`, `_`, `.`, `~` and `/` is
/// escaped, so markers such as `"Copy of "` reach the server as
/// `Copy%20of%20`.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment))
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_slashes_and_unreserved() {
        assert_eq!(encode_path("/a/b/page.php.bak"), "/a/b/page.php.bak");
        assert_eq!(encode_path("/page.php~"), "/page.php~");
        assert_eq!(encode_path("/"), "/");
    }

    #[test]
    fn escapes_spaces_and_reserved() {
        assert_eq!(encode_path("/Copy of page.php"), "/Copy%20of%20page.php");
        assert_eq!(encode_path("/a b/c?d#e"), "/a%20b/c%3Fd%23e");
    }

    #[test]
    fn escapes_non_ascii_as_utf8() {
        assert_eq!(encode_path("/é.php"), "/%C3%A9.php");
    }
}
