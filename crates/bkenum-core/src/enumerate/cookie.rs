//! Gate for the experimental cookie support.

use crate::config::CookieMode;

/// Printed whenever a cookie is supplied, whatever the mode.
pub const COOKIE_WARNING: &str = "WARNING. Cookie support has not been verified against real \
targets yet. Set cookie_mode = \"continue\" (or pass --cookie-mode continue) to run with it anyway.";

/// What the caller should do before starting a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieDecision {
    /// No cookie given: run normally, no warning.
    NoCookie,
    /// Cookie given and allowed: warn, then run with it.
    Proceed,
    /// Cookie given in abort mode: warn and do not probe anything.
    Abort,
}

impl CookieDecision {
    pub fn should_warn(self) -> bool {
        !matches!(self, CookieDecision::NoCookie)
    }

    pub fn should_run(self) -> bool {
        !matches!(self, CookieDecision::Abort)
    }
}

pub fn decide(cookie: Option<&str>, mode: CookieMode) -> CookieDecision {
    match (cookie, mode) {
        (None, _) => CookieDecision::NoCookie,
        (Some(_), CookieMode::Abort) => CookieDecision::Abort,
        (Some(_), CookieMode::Continue) => CookieDecision::Proceed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_cookie_runs_silently() {
        for mode in [CookieMode::Abort, CookieMode::Continue] {
            let d = decide(None, mode);
            assert_eq!(d, CookieDecision::NoCookie);
            assert!(!d.should_warn());
            assert!(d.should_run());
        }
    }

    #[test]
    fn cookie_in_abort_mode_warns_and_stops() {
        let d = decide(Some("session=abc"), CookieMode::Abort);
        assert_eq!(d, CookieDecision::Abort);
        assert!(d.should_warn());
        assert!(!d.should_run());
    }

    #[test]
    fn cookie_in_continue_mode_warns_and_runs() {
        let d = decide(Some("session=abc"), CookieMode::Continue);
        assert_eq!(d, CookieDecision::Proceed);
        assert!(d.should_warn());
        assert!(d.should_run());
    }
}
