//! Tracing setup for the desktop binary.

use tracing_subscriber::EnvFilter;

/// Installs a compact `fmt` subscriber. `RUST_LOG` wins over `filter`.
///
/// Returns `false` if a global subscriber was already installed.
#[must_use]
pub fn init_tracing(filter: &str) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
