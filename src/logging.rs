//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, e.g. `NEOPASS_LOG=neopass=debug`.
pub const LOG_ENV: &str = "NEOPASS_LOG";

/// Install the global subscriber. `default_filter` applies when
/// [`LOG_ENV`] is unset. Logs go to stderr so stdout stays pipeable.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::new(std::env::var(LOG_ENV).unwrap_or_else(|_| default_filter.into()));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
