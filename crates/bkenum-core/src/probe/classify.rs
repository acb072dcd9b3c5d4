//! Classify curl errors into probe failure kinds.

use super::FailureKind;

/// Classify a curl error: TLS negotiation problems vs. everything else.
pub fn classify_curl_error(e: &curl::Error) -> FailureKind {
    if e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_ssl_certproblem()
        || e.is_ssl_cipher()
    {
        return FailureKind::TlsUnsupported;
    }
    FailureKind::Other
}
