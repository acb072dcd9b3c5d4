use bkenum_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
    }

    if let Err(err) = Cli::run_from_args().await {
        eprintln!("bkenum error: {:#}", err);
        std::process::exit(1);
    }
}
