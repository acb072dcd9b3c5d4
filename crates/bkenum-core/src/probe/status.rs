//! Parse the HTTP status line out of collected response header lines.

/// Returns `(status, reason)` from the last `HTTP/...` status line in
/// `lines`. Interim responses (`100 Continue`) come first, so the last one wins.
pub fn parse_status_line(lines: &[String]) -> Option<(u32, String)> {
    lines.iter().rev().find_map(|line| {
        let line = line.trim();
        if !line.starts_with("HTTP/") {
            return None;
        }
        let mut parts = line.splitn(3, ' ');
        let _version = parts.next()?;
        let status = parts.next()?.trim().parse::<u32>().ok()?;
        let reason = parts.next().unwrap_or("").trim().to_string();
        Some((status, reason))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn status_and_reason() {
        let l = lines(&["HTTP/1.1 404 Not Found", "Content-Length: 0", ""]);
        assert_eq!(parse_status_line(&l), Some((404, "Not Found".to_string())));
    }

    #[test]
    fn last_status_line_wins() {
        let l = lines(&[
            "HTTP/1.1 100 Continue",
            "",
            "HTTP/1.1 200 OK",
            "Server: test",
        ]);
        assert_eq!(parse_status_line(&l), Some((200, "OK".to_string())));
    }

    #[test]
    fn missing_reason_is_empty() {
        let l = lines(&["HTTP/2 403"]);
        assert_eq!(parse_status_line(&l), Some((403, String::new())));
    }

    #[test]
    fn no_status_line() {
        let l = lines(&["Content-Type: text/html"]);
        assert_eq!(parse_status_line(&l), None);
        assert_eq!(parse_status_line(&[]), None);
    }
}
