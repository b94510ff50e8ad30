//! Scenario engine configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigResult;
use crate::validation::{validate_positive, Validatable};

/// Scenario engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Deadlock scenario settings
    #[serde(default)]
    pub deadlock: DeadlockConfig,

    /// Memory spike scenario settings
    #[serde(default)]
    pub spike: SpikeConfig,

    /// Memory leak scenario settings
    #[serde(default)]
    pub leak: LeakConfig,

    /// CPU saturation scenario settings
    #[serde(default)]
    pub cpu: CpuConfig,

    /// Upper bounds for caller-supplied parameters
    #[serde(default)]
    pub limits: ScenarioLimitsConfig,
}

/// Deadlock scenario settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeadlockConfig {
    /// Seconds to wait after the locks are cross-held before amplifying
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_establish_grace"
    )]
    pub establish_grace: Duration,

    /// Number of amplification worker threads contending for the first lock
    #[serde(default = "default_amplification_threads")]
    pub amplification_threads: usize,

    /// Milliseconds an amplification worker would hold the lock
    #[serde(
        with = "crate::domains::utils::serde_duration_ms",
        default = "default_amplification_hold"
    )]
    pub amplification_hold: Duration,
}

impl Default for DeadlockConfig {
    fn default() -> Self {
        Self {
            establish_grace: default_establish_grace(),
            amplification_threads: default_amplification_threads(),
            amplification_hold: default_amplification_hold(),
        }
    }
}

/// Memory spike scenario settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpikeConfig {
    /// Records inserted per burst
    #[serde(default = "default_burst_records")]
    pub burst_records: usize,

    /// Seconds the high-water mark is held before release
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_plateau"
    )]
    pub high_plateau: Duration,

    /// Seconds the trough is held before the next burst
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_plateau"
    )]
    pub low_plateau: Duration,
}

impl Default for SpikeConfig {
    fn default() -> Self {
        Self {
            burst_records: default_burst_records(),
            high_plateau: default_plateau(),
            low_plateau: default_plateau(),
        }
    }
}

/// Memory leak scenario settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeakConfig {
    /// Records inserted per requested kilobyte
    #[serde(default = "default_records_per_kb")]
    pub records_per_kb: u64,
}

impl Default for LeakConfig {
    fn default() -> Self {
        Self {
            records_per_kb: default_records_per_kb(),
        }
    }
}

/// CPU saturation scenario settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    /// Iterations of random work between elapsed-time checks
    #[serde(default = "default_batch_iterations")]
    pub batch_iterations: u32,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            batch_iterations: default_batch_iterations(),
        }
    }
}

/// Upper bounds accepted for caller-supplied scenario parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioLimitsConfig {
    /// Maximum memory spike duration in seconds
    #[serde(default = "default_max_spike_duration_secs")]
    pub max_spike_duration_secs: i64,

    /// Maximum memory leak volume in kilobytes
    #[serde(default = "default_max_leak_volume_kb")]
    pub max_leak_volume_kb: i64,

    /// Maximum CPU saturation duration in milliseconds
    #[serde(default = "default_max_cpu_duration_ms")]
    pub max_cpu_duration_ms: i64,
}

impl Default for ScenarioLimitsConfig {
    fn default() -> Self {
        Self {
            max_spike_duration_secs: default_max_spike_duration_secs(),
            max_leak_volume_kb: default_max_leak_volume_kb(),
            max_cpu_duration_ms: default_max_cpu_duration_ms(),
        }
    }
}

impl Validatable for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.deadlock.validate()?;
        self.spike.validate()?;
        self.leak.validate()?;
        self.cpu.validate()?;
        self.limits.validate()?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "engine"
    }
}

impl Validatable for DeadlockConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(
            self.amplification_threads,
            "amplification_threads",
            self.domain_name(),
        )?;
        validate_positive(
            self.amplification_hold.as_millis(),
            "amplification_hold",
            self.domain_name(),
        )?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "engine.deadlock"
    }
}

impl Validatable for SpikeConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(self.burst_records, "burst_records", self.domain_name())?;
        validate_positive(
            self.high_plateau.as_secs(),
            "high_plateau",
            self.domain_name(),
        )?;
        validate_positive(
            self.low_plateau.as_secs(),
            "low_plateau",
            self.domain_name(),
        )?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "engine.spike"
    }
}

impl Validatable for LeakConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(self.records_per_kb, "records_per_kb", self.domain_name())
    }

    fn domain_name(&self) -> &'static str {
        "engine.leak"
    }
}

impl Validatable for CpuConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(
            self.batch_iterations,
            "batch_iterations",
            self.domain_name(),
        )
    }

    fn domain_name(&self) -> &'static str {
        "engine.cpu"
    }
}

impl Validatable for ScenarioLimitsConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(
            self.max_spike_duration_secs,
            "max_spike_duration_secs",
            self.domain_name(),
        )?;
        validate_positive(
            self.max_leak_volume_kb,
            "max_leak_volume_kb",
            self.domain_name(),
        )?;
        validate_positive(
            self.max_cpu_duration_ms,
            "max_cpu_duration_ms",
            self.domain_name(),
        )?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "engine.limits"
    }
}

// Default value functions
fn default_establish_grace() -> Duration {
    Duration::from_secs(5)
}

fn default_amplification_threads() -> usize {
    300
}

fn default_amplification_hold() -> Duration {
    Duration::from_millis(100)
}

fn default_burst_records() -> usize {
    2_000_000
}

fn default_plateau() -> Duration {
    Duration::from_secs(5)
}

fn default_records_per_kb() -> u64 {
    10
}

fn default_batch_iterations() -> u32 {
    10_000
}

fn default_max_spike_duration_secs() -> i64 {
    3_600
}

fn default_max_leak_volume_kb() -> i64 {
    4_194_304
}

fn default_max_cpu_duration_ms() -> i64 {
    3_600_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.deadlock.amplification_threads, 300);
        assert_eq!(config.deadlock.establish_grace, Duration::from_secs(5));
        assert_eq!(config.spike.burst_records, 2_000_000);
        assert_eq!(config.leak.records_per_kb, 10);
        assert_eq!(config.cpu.batch_iterations, 10_000);
    }

    #[test]
    fn test_engine_config_validation() {
        let mut config = EngineConfig::default();
        assert!(config.validate().is_ok());

        config.deadlock.amplification_threads = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_limits_validation() {
        let mut limits = ScenarioLimitsConfig::default();
        assert!(limits.validate().is_ok());

        limits.max_cpu_duration_ms = 0;
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_durations_deserialize_from_plain_numbers() {
        let yaml = "deadlock:\n  establish_grace: 2\n  amplification_hold: 50\n";
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.deadlock.establish_grace, Duration::from_secs(2));
        assert_eq!(
            config.deadlock.amplification_hold,
            Duration::from_millis(50)
        );
        // untouched fields keep their defaults
        assert_eq!(config.deadlock.amplification_threads, 300);
    }
}
