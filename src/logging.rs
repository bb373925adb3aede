//! Tracing subscriber setup for the binaries.
//!
//! Library code only emits `tracing` events; installing a subscriber is
//! left to whoever owns the process.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set and valid, otherwise `default`.
#[must_use]
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::try_new(default).unwrap_or_else(|_| EnvFilter::new("info")))
}

/// Install a stderr `fmt` subscriber.
///
/// Returns `false` when a global subscriber was already set; the existing
/// one stays in place.
pub fn init(default: &str) -> bool {
    match tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "log subscriber not installed");
            false
        }
    }
}

/// Whether the user asked for logs through `RUST_LOG`.
#[must_use]
pub fn requested_by_env() -> bool {
    std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
}
