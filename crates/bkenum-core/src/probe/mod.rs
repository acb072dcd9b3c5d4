//! Candidate probing: one GET per candidate, outcome without judgement.
//!
//! The orchestrator only depends on the [`Prober`] trait; [`CurlProber`] is
//! the libcurl-backed implementation used by the CLI. Tests substitute
//! scripted probers.

mod classify;
mod client;
mod status;

pub use client::{CurlProber, ProbeSettings};
pub use classify::classify_curl_error;
pub use status::parse_status_line;

use crate::url_model::Protocol;
use std::fmt;

/// Why a probe produced no HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// TLS handshake rejected or mishandled; the host likely has no HTTPS.
    TlsUnsupported,
    /// Anything else: DNS, refused, timeout, protocol error.
    Other,
}

/// Result of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered; any status, including 4xx/5xx.
    Success { status: u32, reason: String },
    /// No response was received.
    TransportFailure { kind: FailureKind, detail: String },
    /// The probe was never sent.
    Skipped { reason: String },
}

impl ProbeOutcome {
    /// A response below 400: the candidate looks reachable.
    pub fn is_hit(&self) -> bool {
        matches!(self, ProbeOutcome::Success { status, .. } if *status < 400)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ProbeOutcome::TransportFailure { .. })
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Success { status, reason } => write!(f, "{} {}", status, reason),
            ProbeOutcome::TransportFailure {
                kind: FailureKind::TlsUnsupported,
                detail,
            } => write!(
                f,
                "Request failed, looks like it doesn't support HTTPS?\n{}",
                detail
            ),
            ProbeOutcome::TransportFailure {
                kind: FailureKind::Other,
                detail,
            } => write!(f, "Request failed.\n{}", detail),
            ProbeOutcome::Skipped { reason } => write!(f, "Skipped: {}", reason),
        }
    }
}

/// Issues one GET for `path` (raw, unencoded) on `host` and reports what came back.
///
/// Implementations percent-encode the path themselves and never panic or
/// return errors: every failure is folded into [`ProbeOutcome`].
pub trait Prober: Send + Sync {
    fn probe(
        &self,
        protocol: Protocol,
        host: &str,
        path: &str,
        cookie: Option<&str>,
    ) -> ProbeOutcome;
}
