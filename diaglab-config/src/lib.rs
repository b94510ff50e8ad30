//! Configuration management for diaglab
//!
//! Domain-driven configuration with validation: each concern (engine
//! tuning, HTTP surface, logging) owns one config domain, and the loader
//! composes them from YAML or JSON files plus `DIAGLAB_*` environment
//! overrides.

pub mod domains;
pub mod error;
pub mod loader;
pub mod validation;

// Re-export main types
pub use domains::{
    CpuConfig, DeadlockConfig, DiaglabConfig, EngineConfig, HttpConfig, LeakConfig, LogLevel,
    LoggingConfig, ScenarioLimitsConfig, SpikeConfig,
};
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use validation::Validatable;
