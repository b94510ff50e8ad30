//! Configuration loading from files and the environment

use std::path::Path;

use tracing::debug;

use crate::domains::DiaglabConfig;
use crate::error::{ConfigError, ConfigResult};

/// Loads configuration from YAML or JSON files with `DIAGLAB_*` environment
/// overrides applied on top.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file, apply environment overrides and
    /// validate the result.
    pub fn from_file(&self, path: &Path) -> ConfigResult<DiaglabConfig> {
        let content = std::fs::read_to_string(path)?;

        let mut config: DiaglabConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        debug!(path = %path.display(), "configuration file loaded");
        apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides, for running without a file.
    pub fn from_env(&self) -> ConfigResult<DiaglabConfig> {
        let mut config = DiaglabConfig::default();
        apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }
}

fn apply_env_overrides(config: &mut DiaglabConfig) -> ConfigResult<()> {
    if let Ok(addr) = std::env::var("DIAGLAB_BIND_ADDRESS") {
        config.http.bind_address = addr;
    }

    if let Ok(level) = std::env::var("DIAGLAB_LOG_LEVEL") {
        config.logging.level = level
            .parse()
            .map_err(|e| ConfigError::EnvError(format!("DIAGLAB_LOG_LEVEL: {e}")))?;
    }

    Ok(())
}
