//! Page list ingestion: one URL per line.

use std::fs;
use std::path::{Path, PathBuf};

/// The URL list could not be read. Fatal for the whole run.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot read input file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads `path` and returns its non-blank lines, trimmed.
pub fn read_url_list(path: &Path) -> Result<Vec<String>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_url_list(&text))
}

/// Splits `text` into trimmed, non-empty lines. No comments, no quoting.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn skips_blank_lines_and_trims() {
        let text = "http://www.example.com/page1.php\n\n   \n  https://www.example.com/dir/page2.asp \r\n";
        assert_eq!(
            parse_url_list(text),
            vec![
                "http://www.example.com/page1.php".to_string(),
                "https://www.example.com/dir/page2.asp".to_string(),
            ]
        );
    }

    #[test]
    fn keeps_lines_verbatim_otherwise() {
        let text = "# not a comment\n'quoted'\n";
        assert_eq!(parse_url_list(text), vec!["# not a comment", "'quoted'"]);
    }

    #[test]
    fn reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"http://a.example/x.php\n\nhttp://b.example/y\n").unwrap();
        f.flush().unwrap();
        let urls = read_url_list(f.path()).unwrap();
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = read_url_list(&path).unwrap_err();
        assert!(matches!(err, InputError::Unreadable { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }
}
