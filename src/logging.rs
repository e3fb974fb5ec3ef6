//! Logging setup for the binary
//!
//! Logs go to stderr so they never mix with command output. The level is
//! taken from `RUST_LOG` and defaults to `warn` to keep the prompt clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber; later calls are ignored
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
