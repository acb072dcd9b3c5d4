//! Reporting of probe outcomes.
//!
//! The orchestrator hands every event to a [`Reporter`]; the console
//! reporter writes the line-oriented stdout format.

use crate::control::AbortToken;
use crate::probe::ProbeOutcome;
use crate::url_model::DecomposeError;
use std::io::{self, Write};

/// One probed candidate and what came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    pub requested_url: String,
    pub outcome: ProbeOutcome,
}

/// Sink for enumeration events.
pub trait Reporter {
    /// Called once per run with every parsed input URL.
    fn url_list(&mut self, urls: &[String]);
    /// An input URL could not be decomposed and is skipped.
    fn skipped_url(&mut self, url: &str, err: &DecomposeError);
    /// One candidate was probed (or dropped on abort).
    fn record(&mut self, record: &ReportRecord);
}

/// Writes the plain-text report:
///
/// ```text
/// ["http://example.com/page.php"]
/// GET: http://example.com/Copy%20of%20page.php
/// 404 Not Found
/// ```
///
/// Once a write or flush fails (e.g. stdout closed by `| head`) nothing more
/// is written and the attached abort token, if any, is set.
pub struct ConsoleReporter<W: Write> {
    out: W,
    only_hits: bool,
    abort_on_error: Option<AbortToken>,
    broken: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            only_hits: false,
            abort_on_error: None,
            broken: false,
        }
    }

    /// Request abort on `token` when the output stops accepting writes.
    pub fn abort_on_error(mut self, token: AbortToken) -> Self {
        self.abort_on_error = Some(token);
        self
    }

    /// Whether a write or flush has failed.
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Report only candidates answering below 400.
    pub fn only_hits(mut self, only_hits: bool) -> Self {
        self.only_hits = only_hits;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) {
        if self.broken {
            return;
        }
        let written = writeln!(self.out, "{}", line);
        self.check(written);
    }

    fn flush(&mut self) {
        if self.broken {
            return;
        }
        let flushed = self.out.flush();
        self.check(flushed);
    }

    fn check(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.broken = true;
            tracing::warn!("report output failed, stopping: {}", e);
            if let Some(token) = &self.abort_on_error {
                token.request_abort();
            }
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn url_list(&mut self, urls: &[String]) {
        self.write_line(format_args!("{:?}", urls));
    }

    fn skipped_url(&mut self, url: &str, err: &DecomposeError) {
        self.write_line(format_args!("Skipping {}: {}", url, err));
    }

    fn record(&mut self, record: &ReportRecord) {
        if self.only_hits && !record.outcome.is_hit() {
            return;
        }
        self.write_line(format_args!("GET: {}", record.requested_url));
        self.write_line(format_args!("{}", record.outcome));
        self.flush();
    }
}

/// Collects everything in memory. Useful for tests and library callers.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub urls: Vec<String>,
    pub skipped: Vec<(String, DecomposeError)>,
    pub records: Vec<ReportRecord>,
}

impl Reporter for CollectingReporter {
    fn url_list(&mut self, urls: &[String]) {
        self.urls = urls.to_vec();
    }

    fn skipped_url(&mut self, url: &str, err: &DecomposeError) {
        self.skipped.push((url.to_string(), err.clone()));
    }

    fn record(&mut self, record: &ReportRecord) {
        self.records.push(record.clone());
    }
}
