//! libcurl-backed prober.
//!
//! One easy handle per probe, HTTP/1.1, paths sent as-is. Only the status
//! line matters, so the transfer is cut off as soon as body data arrives.

use super::{classify_curl_error, parse_status_line, FailureKind, ProbeOutcome, Prober};
use crate::config::BkenumConfig;
use crate::url_model::{encode_path, Protocol};
use std::str;
use std::time::Duration;

/// Transport settings applied to every probe.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub verify_tls: bool,
    pub follow_redirects: bool,
    pub user_agent: Option<String>,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self::from_config(&BkenumConfig::default())
    }
}

impl ProbeSettings {
    pub fn from_config(cfg: &BkenumConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            verify_tls: cfg.verify_tls,
            follow_redirects: cfg.follow_redirects,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// Why a transfer produced no usable status.
enum PerformError {
    Curl(curl::Error),
    NoStatus,
}

impl From<curl::Error> for PerformError {
    fn from(e: curl::Error) -> Self {
        PerformError::Curl(e)
    }
}

/// Probes candidates with blocking libcurl requests.
///
/// Runs in the current thread; the parallel orchestrator calls it from
/// `spawn_blocking`.
#[derive(Debug, Clone, Default)]
pub struct CurlProber {
    settings: ProbeSettings,
}

impl CurlProber {
    pub fn new(settings: ProbeSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ProbeSettings {
        &self.settings
    }

    fn perform(&self, url: &str, cookie: Option<&str>) -> Result<(u32, String), PerformError> {
        let mut headers: Vec<String> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.http_version(curl::easy::HttpVersion::V11)?;
        easy.path_as_is(true)?;
        easy.follow_location(self.settings.follow_redirects)?;
        easy.connect_timeout(self.settings.connect_timeout)?;
        easy.timeout(self.settings.timeout)?;
        easy.ssl_verify_peer(self.settings.verify_tls)?;
        easy.ssl_verify_host(self.settings.verify_tls)?;
        if let Some(ua) = &self.settings.user_agent {
            easy.useragent(ua)?;
        }
        if let Some(cookie) = cookie {
            let mut list = curl::easy::List::new();
            list.append(&format!("Cookie: {}", cookie))?;
            easy.http_headers(list)?;
        }

        let result = {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            // Returning 0 makes libcurl abort with a write error.
            transfer.write_function(|_| Ok(0))?;
            transfer.perform()
        };

        match result {
            Ok(()) => {}
            Err(e) if e.is_write_error() && parse_status_line(&headers).is_some() => {}
            Err(e) => return Err(PerformError::Curl(e)),
        }

        parse_status_line(&headers).ok_or(PerformError::NoStatus)
    }
}

impl Prober for CurlProber {
    fn probe(
        &self,
        protocol: Protocol,
        host: &str,
        path: &str,
        cookie: Option<&str>,
    ) -> ProbeOutcome {
        let url = format!("{}{}{}", protocol.prefix(), host, encode_path(path));
        match self.perform(&url, cookie) {
            Ok((status, reason)) => {
                tracing::debug!(%url, status, "probe answered");
                ProbeOutcome::Success { status, reason }
            }
            Err(PerformError::Curl(e)) => {
                let kind = classify_curl_error(&e);
                tracing::debug!(%url, ?kind, error = %e, "probe failed");
                ProbeOutcome::TransportFailure {
                    kind,
                    detail: e.to_string(),
                }
            }
            Err(PerformError::NoStatus) => {
                tracing::debug!(%url, "probe got no status line");
                ProbeOutcome::TransportFailure {
                    kind: FailureKind::Other,
                    detail: "no HTTP status line in response".to_string(),
                }
            }
        }
    }
}
