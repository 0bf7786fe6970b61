//! Log subscriber setup
//!
//! Logs go to stderr so the card on stdout stays readable. `RUST_LOG`
//! overrides the level picked from the verbosity flags.

use crate::cli::Verbosity;
use tracing_subscriber::EnvFilter;

/// Build the filter for a verbosity level, honouring `RUST_LOG` when set
pub fn filter_for(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("healthbuddy={}", verbosity.log_directive()))
    })
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
