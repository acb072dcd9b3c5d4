//! Run control: a shared abort token checked before every new probe.
//!
//! The CLI sets the token on Ctrl-C; the orchestrator stops issuing probes,
//! lets in-flight ones finish and drops whatever was not started.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable abort flag. All clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct AbortToken(Arc<AtomicBool>);

impl AbortToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request abort. Idempotent.
    pub fn request_abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let token = AbortToken::new();
        let other = token.clone();
        assert!(!other.is_aborted());
        token.request_abort();
        assert!(other.is_aborted());
        token.request_abort();
        assert!(token.is_aborted());
    }
}
