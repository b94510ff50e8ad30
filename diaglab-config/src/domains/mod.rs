//! Configuration domains

pub mod engine;
pub mod http;
pub mod logging;
pub mod utils;

pub use engine::{
    CpuConfig, DeadlockConfig, EngineConfig, LeakConfig, ScenarioLimitsConfig, SpikeConfig,
};
pub use http::HttpConfig;
pub use logging::{LogLevel, LoggingConfig};

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::validation::Validatable;

/// Top-level diaglab configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DiaglabConfig {
    /// Scenario engine tuning and parameter limits
    pub engine: EngineConfig,

    /// HTTP surface settings
    pub http: HttpConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl DiaglabConfig {
    /// Validate all domains
    pub fn validate(&self) -> ConfigResult<()> {
        self.engine.validate()?;
        self.http.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(DiaglabConfig::default().validate().is_ok());
    }
}
