//! Default command: probe every candidate of every page in the input file.

use anyhow::Result;
use bkenum_core::config::BkenumConfig;
use bkenum_core::enumerate::cookie::{self, COOKIE_WARNING};
use bkenum_core::enumerate::{ConsoleReporter, Enumerator};
use bkenum_core::input;
use bkenum_core::mutation::MarkerCatalog;
use bkenum_core::probe::{CurlProber, ProbeSettings};
use std::path::Path;

pub async fn run_enumerate(
    cfg: &BkenumConfig,
    file: &Path,
    cookie: Option<String>,
    only_hits: bool,
) -> Result<()> {
    let decision = cookie::decide(cookie.as_deref(), cfg.cookie_mode);
    if decision.should_warn() {
        println!("{}", COOKIE_WARNING);
        tracing::warn!(mode = ?cfg.cookie_mode, "cookie supplied");
    }
    if !decision.should_run() {
        tracing::info!("cookie supplied in abort mode; nothing probed");
        return Ok(());
    }

    let urls = input::read_url_list(file)?;
    tracing::info!(count = urls.len(), file = %file.display(), "loaded page list");

    let prober = CurlProber::new(ProbeSettings::from_config(cfg));
    let catalog = MarkerCatalog::from_config(cfg.markers.as_ref());
    let enumerator = Enumerator::new(prober, catalog).with_cookie(cookie);

    let token = enumerator.abort_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received; finishing in-flight probes");
            token.request_abort();
        }
    });

    let mut reporter = ConsoleReporter::new(std::io::stdout())
        .only_hits(only_hits)
        .abort_on_error(enumerator.abort_token());
    let concurrency = cfg.effective_concurrency();
    let summary = if concurrency > 1 {
        enumerator
            .run_parallel(&urls, &mut reporter, concurrency)
            .await
    } else {
        tokio::task::spawn_blocking(move || enumerator.run(&urls, &mut reporter)).await?
    };

    if summary.aborted {
        eprintln!(
            "Interrupted: {} probe(s) sent, {} hit(s).",
            summary.probes, summary.hits
        );
    }
    Ok(())
}
