//! Telemetry initialization (tracing with fmt subscriber and env-filter).
//!
//! Log verbosity is controlled via the standard `RUST_LOG` environment variable,
//! defaulting to `info` when unset:
//!
//! ```bash
//! RUST_LOG=recbox=debug,tower_http=debug recbox
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the tracing subscriber for structured console logging.
///
/// Should be called once at startup, after configuration is loaded.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Telemetry initialized");

    Ok(())
}
