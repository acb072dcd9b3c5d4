//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! Stdout is reserved for the probe report, so logs never go there.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives, e.g. `BKENUM_LOG=trace`.
pub const LOG_ENV: &str = "BKENUM_LOG";

const DEFAULT_FILTER: &str = "info,bkenum=debug,bkenum_core=debug";

/// `$XDG_STATE_HOME/bkenum/bkenum.log`, with its directory created.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs =
        xdg::BaseDirectories::with_prefix("bkenum").context("locate XDG state directory")?;
    xdg_dirs
        .place_state_file("bkenum.log")
        .context("create log directory")
}

/// Log to the state-dir file. Returns the file path.
///
/// On failure nothing is installed, so the caller can fall back to
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "bkenum logging to {}", path.display());
    Ok(path)
}

/// Stderr-only logging, compact and without targets, for when the log file
/// is unusable.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::new(filter_directives(std::env::var(LOG_ENV).ok()))
}

/// Directives from `BKENUM_LOG` when set and non-blank, else the default.
fn filter_directives(from_env: Option<String>) -> String {
    match from_env {
        Some(d) if !d.trim().is_empty() => d,
        _ => DEFAULT_FILTER.to_string(),
    }
}
