//! CLI command handlers.

mod dry_run;
mod enumerate;

pub use dry_run::run_dry_run;
#[cfg(test)]
pub use dry_run::{is_broken_pipe, write_candidates};
pub use enumerate::run_enumerate;
