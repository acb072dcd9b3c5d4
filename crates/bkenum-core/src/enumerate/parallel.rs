//! Bounded parallel run.
//!
//! Keeps up to `max_concurrent` probes in flight for the current URL; when
//! one finishes the next candidate is started. Outcomes are reported in
//! generator order once the URL is done, so the report matches a
//! sequential run line for line.

use tokio::task::JoinSet;

use super::{log_summary, Enumerator, ReportRecord, Reporter, RunSummary};
use crate::config::clamp_concurrency;
use crate::mutation::generate;
use crate::probe::{FailureKind, ProbeOutcome, Prober};

impl<P: Prober + 'static> Enumerator<P> {
    /// Like [`Enumerator::run`] but with up to `max_concurrent` blocking
    /// probes in flight (clamped to `1..=MAX_CONCURRENCY`).
    ///
    /// On abort no new probe is started; probes already running finish, and
    /// queued tasks that had not started report [`ProbeOutcome::Skipped`].
    pub async fn run_parallel(
        &self,
        urls: &[String],
        reporter: &mut dyn Reporter,
        max_concurrent: usize,
    ) -> RunSummary {
        let max_concurrent = clamp_concurrency(max_concurrent);
        reporter.url_list(urls);
        let mut summary = RunSummary {
            urls: urls.len(),
            ..RunSummary::default()
        };

        for url in urls {
            if self.abort.is_aborted() {
                summary.aborted = true;
                break;
            }
            let Some(components) = self.decompose_or_skip(url, reporter, &mut summary) else {
                continue;
            };

            let mut pending = generate(&self.catalog, &components).enumerate();
            // (requested URL, record) per candidate, in generator order.
            let mut slots: Vec<(String, Option<ReportRecord>)> = Vec::new();
            let mut join_set: JoinSet<(usize, ReportRecord)> = JoinSet::new();

            loop {
                while join_set.len() < max_concurrent && !self.abort.is_aborted() {
                    let Some((idx, candidate)) = pending.next() else {
                        break;
                    };
                    slots.push((candidate.url(), None));
                    let this = self.clone();
                    join_set.spawn_blocking(move || {
                        let record = if this.abort.is_aborted() {
                            ReportRecord {
                                requested_url: candidate.url(),
                                outcome: ProbeOutcome::Skipped {
                                    reason: "run aborted".to_string(),
                                },
                            }
                        } else {
                            this.probe_candidate(&candidate)
                        };
                        (idx, record)
                    });
                }

                match join_set.join_next().await {
                    Some(Ok((idx, record))) => slots[idx].1 = Some(record),
                    // Panics are caught in probe_candidate; only cancellation lands here.
                    Some(Err(e)) => tracing::warn!("probe task cancelled: {}", e),
                    None => break,
                }
            }

            if self.abort.is_aborted() {
                summary.dropped += pending.count();
            }

            for (requested_url, record) in slots {
                let record = record.unwrap_or_else(|| ReportRecord {
                    requested_url,
                    outcome: ProbeOutcome::TransportFailure {
                        kind: FailureKind::Other,
                        detail: "probe task did not complete".to_string(),
                    },
                });
                summary.tally(&record.outcome);
                reporter.record(&record);
            }

            if self.abort.is_aborted() {
                summary.aborted = true;
                break;
            }
        }

        log_summary(&summary);
        summary
    }
}
