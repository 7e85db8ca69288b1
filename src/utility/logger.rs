use tracing_subscriber::EnvFilter;

use crate::utility::configuration::DEFAULT_LOG_FILTER;

/// Installs the global subscriber. Log lines go to stderr, stdout is reserved for results.
/// An unparsable filter falls back to `DEFAULT_LOG_FILTER`.
pub fn init_logger(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // fails only if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
