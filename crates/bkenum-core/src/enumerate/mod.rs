//! Enumeration orchestrator.
//!
//! For each input URL: decompose (skip and warn on failure), generate every
//! candidate, probe each one and report the outcome. Nothing a single URL
//! or candidate does can stop the batch; only the abort token can.

pub mod cookie;
mod parallel;
mod report;

pub use report::{CollectingReporter, ConsoleReporter, ReportRecord, Reporter};

use crate::control::AbortToken;
use crate::mutation::{generate, Candidate, MarkerCatalog};
use crate::probe::{FailureKind, ProbeOutcome, Prober};
use crate::url_model::{decompose, UrlComponents};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Counters for one run, logged when it ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Input URLs handed to the run.
    pub urls: usize,
    /// Input URLs skipped because they could not be decomposed.
    pub skipped_urls: usize,
    /// Probes that were actually sent.
    pub probes: usize,
    /// Probes answered with a status below 400.
    pub hits: usize,
    /// Probes that got no response.
    pub failures: usize,
    /// Candidates of the URL in progress that were never probed because
    /// the run was aborted. Later URLs are not expanded and not counted.
    pub dropped: usize,
    pub aborted: bool,
}

impl RunSummary {
    fn tally(&mut self, outcome: &ProbeOutcome) {
        match outcome {
            ProbeOutcome::Skipped { .. } => self.dropped += 1,
            ProbeOutcome::TransportFailure { .. } => {
                self.probes += 1;
                self.failures += 1;
            }
            ProbeOutcome::Success { .. } => {
                self.probes += 1;
                if outcome.is_hit() {
                    self.hits += 1;
                }
            }
        }
    }
}

/// Drives decomposition, mutation and probing for a batch of page URLs.
///
/// Cheap to clone: the prober and catalog are shared.
pub struct Enumerator<P> {
    prober: Arc<P>,
    catalog: Arc<MarkerCatalog>,
    cookie: Option<Arc<str>>,
    abort: AbortToken,
}

impl<P> Clone for Enumerator<P> {
    fn clone(&self) -> Self {
        Self {
            prober: Arc::clone(&self.prober),
            catalog: Arc::clone(&self.catalog),
            cookie: self.cookie.clone(),
            abort: self.abort.clone(),
        }
    }
}

impl<P: Prober + 'static> Enumerator<P> {
    pub fn new(prober: P, catalog: MarkerCatalog) -> Self {
        Self {
            prober: Arc::new(prober),
            catalog: Arc::new(catalog),
            cookie: None,
            abort: AbortToken::new(),
        }
    }

    /// Cookie header value sent with every probe of the run.
    pub fn with_cookie(mut self, cookie: Option<String>) -> Self {
        self.cookie = cookie.map(Arc::from);
        self
    }

    pub fn with_abort_token(mut self, token: AbortToken) -> Self {
        self.abort = token;
        self
    }

    pub fn abort_token(&self) -> AbortToken {
        self.abort.clone()
    }

    pub fn catalog(&self) -> &MarkerCatalog {
        &self.catalog
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Probe one candidate and wrap the outcome with the URL that was requested.
    ///
    /// A panicking prober is reported as a transport failure for this
    /// candidate only.
    pub fn probe_candidate(&self, candidate: &Candidate) -> ReportRecord {
        let path = candidate.path();
        let probed = panic::catch_unwind(AssertUnwindSafe(|| {
            self.prober.probe(
                candidate.protocol,
                &candidate.host,
                &path,
                self.cookie.as_deref(),
            )
        }));
        let requested_url = candidate.url();
        let outcome = probed.unwrap_or_else(|payload| {
            let detail = panic_message(payload.as_ref());
            tracing::error!(url = %requested_url, %detail, "prober panicked");
            ProbeOutcome::TransportFailure {
                kind: FailureKind::Other,
                detail: format!("prober panicked: {}", detail),
            }
        });
        ReportRecord {
            requested_url,
            outcome,
        }
    }

    /// Sequential run: one URL at a time, one probe at a time.
    pub fn run(&self, urls: &[String], reporter: &mut dyn Reporter) -> RunSummary {
        reporter.url_list(urls);
        let mut summary = RunSummary {
            urls: urls.len(),
            ..RunSummary::default()
        };

        'urls: for url in urls {
            if self.abort.is_aborted() {
                summary.aborted = true;
                break;
            }
            let Some(components) = self.decompose_or_skip(url, reporter, &mut summary) else {
                continue;
            };
            let mut candidates = generate(&self.catalog, &components);
            while let Some(candidate) = candidates.next() {
                if self.abort.is_aborted() {
                    summary.aborted = true;
                    summary.dropped += 1 + candidates.count();
                    break 'urls;
                }
                let record = self.probe_candidate(&candidate);
                summary.tally(&record.outcome);
                reporter.record(&record);
            }
        }

        log_summary(&summary);
        summary
    }

    fn decompose_or_skip(
        &self,
        url: &str,
        reporter: &mut dyn Reporter,
        summary: &mut RunSummary,
    ) -> Option<UrlComponents> {
        match decompose(url) {
            Ok(components) => {
                tracing::debug!(%url, "enumerating candidates");
                Some(components)
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "skipping URL");
                summary.skipped_urls += 1;
                reporter.skipped_url(url, &err);
                None
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn log_summary(summary: &RunSummary) {
    tracing::info!(
        urls = summary.urls,
        skipped_urls = summary.skipped_urls,
        probes = summary.probes,
        hits = summary.hits,
        failures = summary.failures,
        dropped = summary.dropped,
        aborted = summary.aborted,
        "enumeration finished"
    );
}
