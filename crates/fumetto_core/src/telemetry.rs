//! Tracing initialization for binaries and integration tests.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Initialize tracing with a human-readable fmt layer.
///
/// The subscriber respects the `RUST_LOG` environment variable and falls
/// back to `info`.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_telemetry() -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        );

    tracing_subscriber::registry().with(fmt_layer).try_init()?;

    Ok(())
}
