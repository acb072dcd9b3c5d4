//! CLI for the bkenum backup-file enumerator.

mod commands;

use anyhow::Result;
use bkenum_core::config::{self, CookieMode};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use commands::{run_dry_run, run_enumerate};

/// Probe mutated copies of known pages for forgotten backup files.
#[derive(Debug, Parser)]
#[command(name = "bkenum")]
#[command(about = "bkenum: find forgotten backup copies of known web pages", long_about = None)]
pub struct Cli {
    /// File which contains a list of valid web pages, separated by newlines.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Cookie value sent with every request. Experimental, see --cookie-mode.
    #[arg(short = 'c', long, value_name = "VALUE")]
    pub cookie: Option<String>,

    /// What to do when a cookie is given: stop after the warning, or run with it.
    #[arg(long, value_enum, value_name = "MODE")]
    pub cookie_mode: Option<CookieModeArg>,

    /// Probes in flight at once (1 = sequential). Overrides the config file.
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Only report candidates that answered with a status below 400.
    #[arg(long)]
    pub only_hits: bool,

    /// Print the candidate URLs without sending any request.
    #[arg(long)]
    pub dry_run: bool,

    /// Config file to use instead of ~/.config/bkenum/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CookieModeArg {
    Abort,
    Continue,
}

impl From<CookieModeArg> for CookieMode {
    fn from(arg: CookieModeArg) -> Self {
        match arg {
            CookieModeArg::Abort => CookieMode::Abort,
            CookieModeArg::Continue => CookieMode::Continue,
        }
    }
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        Cli::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_default(),
        };
        if let Some(mode) = self.cookie_mode {
            cfg.cookie_mode = mode.into();
        }
        if let Some(jobs) = self.jobs {
            cfg.concurrency = jobs;
        }
        tracing::debug!("effective config: {:?}", cfg);

        if self.dry_run {
            return run_dry_run(&cfg, &self.file);
        }
        run_enumerate(&cfg, &self.file, self.cookie, self.only_hits).await
    }
}

#[cfg(test)]
mod tests;
