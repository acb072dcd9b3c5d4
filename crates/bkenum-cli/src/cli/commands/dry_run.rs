//! `--dry-run`: list candidate URLs without probing.

use anyhow::Result;
use bkenum_core::config::BkenumConfig;
use bkenum_core::input;
use bkenum_core::mutation::{candidate_count, generate, MarkerCatalog};
use bkenum_core::url_model::decompose;
use std::io::{self, Write};
use std::path::Path;

pub fn run_dry_run(cfg: &BkenumConfig, file: &Path) -> Result<()> {
    let urls = input::read_url_list(file)?;
    let catalog = MarkerCatalog::from_config(cfg.markers.as_ref());
    let stdout = io::stdout();
    match write_candidates(&mut stdout.lock(), &catalog, &urls) {
        Ok(total) => tracing::info!(total, "dry run listed candidates"),
        Err(e) if is_broken_pipe(&e) => tracing::debug!("dry run output closed early"),
        Err(e) => return Err(e),
    }
    Ok(())
}

/// A closed reader (`| head`) ends the listing; it is not a failure.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}

/// Writes the URL list line, then every candidate URL (or a skip line).
/// Returns the number of candidates written.
pub fn write_candidates<W: Write>(
    out: &mut W,
    catalog: &MarkerCatalog,
    urls: &[String],
) -> Result<usize> {
    writeln!(out, "{:?}", urls)?;
    let mut total = 0;
    for url in urls {
        match decompose(url) {
            Ok(components) => {
                tracing::debug!(
                    %url,
                    candidates = candidate_count(catalog, &components.filename),
                    "listing candidates"
                );
                for candidate in generate(catalog, &components) {
                    writeln!(out, "{}", candidate.url())?;
                    total += 1;
                }
            }
            Err(err) => writeln!(out, "Skipping {}: {}", url, err)?,
        }
    }
    Ok(total)
}
