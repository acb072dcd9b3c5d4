//! CLI parse tests and dry-run output.

use super::commands::{is_broken_pipe, write_candidates};
use super::{Cli, CookieModeArg};
use bkenum_core::config::CookieMode;
use bkenum_core::mutation::MarkerCatalog;
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_file_only() {
    let cli = parse(&["bkenum", "-f", "pages.txt"]);
    assert_eq!(cli.file, Path::new("pages.txt"));
    assert!(cli.cookie.is_none());
    assert!(cli.cookie_mode.is_none());
    assert!(cli.jobs.is_none());
    assert!(!cli.only_hits);
    assert!(!cli.dry_run);
    assert!(cli.config.is_none());
}

#[test]
fn cli_requires_file() {
    assert!(Cli::try_parse_from(["bkenum"]).is_err());
    assert!(Cli::try_parse_from(["bkenum", "-c", "a=b"]).is_err());
}

#[test]
fn cli_parse_cookie_and_mode() {
    let cli = parse(&[
        "bkenum",
        "--file",
        "pages.txt",
        "-c",
        "session=abc; theme=dark",
        "--cookie-mode",
        "continue",
    ]);
    assert_eq!(cli.cookie.as_deref(), Some("session=abc; theme=dark"));
    assert_eq!(cli.cookie_mode, Some(CookieModeArg::Continue));
    assert_eq!(CookieMode::from(CookieModeArg::Continue), CookieMode::Continue);
    assert_eq!(CookieMode::from(CookieModeArg::Abort), CookieMode::Abort);
}

#[test]
fn cli_rejects_unknown_cookie_mode() {
    assert!(Cli::try_parse_from(["bkenum", "-f", "x", "--cookie-mode", "maybe"]).is_err());
}

#[test]
fn cli_parse_jobs_and_flags() {
    let cli = parse(&[
        "bkenum",
        "-f",
        "pages.txt",
        "-j",
        "12",
        "--only-hits",
        "--dry-run",
        "--config",
        "/tmp/bkenum.toml",
    ]);
    assert_eq!(cli.jobs, Some(12));
    assert!(cli.only_hits);
    assert!(cli.dry_run);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/bkenum.toml")));
}

#[test]
fn dry_run_lists_every_candidate() {
    let urls = vec![
        "http://example.com/page.php".to_string(),
        "gopher://example.com/x".to_string(),
        "https://example.com/docs/".to_string(),
    ];
    let mut out = Vec::new();
    let total = write_candidates(&mut out, &MarkerCatalog::standard(), &urls).unwrap();
    assert_eq!(total, 45 + 32);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1 + 45 + 1 + 32);
    assert_eq!(lines[1], "http://example.com/Copy%20of%20page.php");
    assert!(lines[46].starts_with("Skipping gopher://example.com/x: "));
    assert_eq!(lines[47], "https://example.com/docs/Copy%20of%20");
    assert_eq!(lines[48], "https://example.com/docs/.zip");
}

struct ClosedPipe;

impl std::io::Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn dry_run_closed_pipe_is_not_an_error() {
    let urls = vec!["http://example.com/page.php".to_string()];
    let err = write_candidates(&mut ClosedPipe, &MarkerCatalog::standard(), &urls).unwrap_err();
    assert!(is_broken_pipe(&err));

    let other = anyhow::Error::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
    assert!(!is_broken_pipe(&other));
    assert!(!is_broken_pipe(&anyhow::anyhow!("read config")));
}
