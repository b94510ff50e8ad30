//! Tracing initialization

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use diaglab_config::LoggingConfig;

/// Initialize console tracing from the logging configuration.
///
/// Filter precedence: configured level, then `RUST_LOG`, then "info".
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(config.level.as_str())
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Use try_init to avoid panic if a global subscriber is already set
    if tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("global tracing subscriber already initialized, skipping");
    }

    Ok(())
}
