//! Log subscriber configuration.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use urban_intel_core::{Error, Result};

/// Configure stdout logging. Call once at startup.
///
/// `RUST_LOG` overrides the default filter; `json` switches to structured
/// JSON lines.
pub fn configure_tracing(json: bool) -> Result<()> {
    let env_filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,urban_intel=debug".into()),
    );

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    installed.map_err(|e| Error::internal(format!("Failed to install tracing subscriber: {}", e)))
}
