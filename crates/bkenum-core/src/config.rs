use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound on concurrent probes, whatever the config or CLI asks for.
pub const MAX_CONCURRENCY: usize = 32;

/// What to do when a cookie is supplied. Cookie support has not been
/// verified against real targets, so the historical behaviour is to warn
/// and stop; `continue` warns and runs with the cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookieMode {
    #[default]
    Abort,
    Continue,
}

/// Optional `[markers]` section. Each list present replaces the built-in one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerConfig {
    #[serde(default)]
    pub front_only: Option<Vec<String>>,
    #[serde(default)]
    pub back_only: Option<Vec<String>>,
    #[serde(default)]
    pub all_positions: Option<Vec<String>>,
}

/// Global configuration loaded from `~/.config/bkenum/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BkenumConfig {
    /// Probes in flight at once. 1 = strictly sequential.
    pub concurrency: usize,
    /// Connect timeout per probe, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout per probe, in seconds.
    pub timeout_secs: u64,
    /// Verify server certificates on HTTPS probes.
    #[serde(default = "default_true")]
    pub verify_tls: bool,
    /// Follow redirects instead of reporting the 3xx status.
    #[serde(default)]
    pub follow_redirects: bool,
    /// User-Agent header; libcurl sends none when unset.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Behaviour when a cookie is supplied: "abort" (default) or "continue".
    #[serde(default)]
    pub cookie_mode: CookieMode,
    /// Optional marker overrides.
    #[serde(default)]
    pub markers: Option<MarkerConfig>,
}

fn default_true() -> bool {
    true
}

impl Default for BkenumConfig {
    fn default() -> Self {
        Self {
            concurrency: 1,
            connect_timeout_secs: 15,
            timeout_secs: 30,
            verify_tls: true,
            follow_redirects: false,
            user_agent: None,
            cookie_mode: CookieMode::Abort,
            markers: None,
        }
    }
}

impl BkenumConfig {
    /// `concurrency` clamped to `1..=MAX_CONCURRENCY`.
    pub fn effective_concurrency(&self) -> usize {
        clamp_concurrency(self.concurrency)
    }
}

pub fn clamp_concurrency(n: usize) -> usize {
    n.clamp(1, MAX_CONCURRENCY)
}

/// Default config file, if one exists under `$XDG_CONFIG_HOME/bkenum/`.
/// Nothing is created.
pub fn find_default_config() -> Result<Option<PathBuf>> {
    let xdg_dirs =
        xdg::BaseDirectories::with_prefix("bkenum").context("locate XDG config directory")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Configuration for a run without `--config`: the default file when it
/// exists and parses, built-in defaults otherwise. Never fails.
pub fn load_or_default() -> BkenumConfig {
    load_default_from(find_default_config())
}

fn load_default_from(found: Result<Option<PathBuf>>) -> BkenumConfig {
    let loaded = found.and_then(|path| path.map(|p| load_from_path(&p)).transpose());
    match loaded {
        Ok(Some(cfg)) => cfg,
        Ok(None) => BkenumConfig::default(),
        Err(e) => {
            tracing::warn!("ignoring default config: {:#}", e);
            BkenumConfig::default()
        }
    }
}

/// Load configuration from an explicit path (e.g. `--config`).
pub fn load_from_path(path: &Path) -> Result<BkenumConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: BkenumConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
