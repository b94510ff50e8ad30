//! Server assembly and startup

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use diaglab_config::{DiaglabConfig, EngineConfig};
use diaglab_engine::{
    CpuTuning, DeadlockTuning, EngineTuning, LeakTuning, LockPair, ScenarioInvoker,
    ScenarioLimits, SpikeTuning, TransactionCache,
};
use diaglab_rest_api::{create_rest_app, AppConfig, ScenariosContext};

/// A configured diaglab server ready to serve scenario triggers.
///
/// Construction builds the process-wide singletons (transaction cache, lock
/// pair) that every scenario invocation shares for the process lifetime;
/// nothing resets them between requests.
pub struct Server {
    config: DiaglabConfig,
    invoker: Arc<ScenarioInvoker>,
}

impl Server {
    pub fn new(config: DiaglabConfig) -> Self {
        let invoker = Arc::new(ScenarioInvoker::new(
            Arc::new(TransactionCache::new()),
            Arc::new(LockPair::new()),
            engine_tuning(&config.engine),
            scenario_limits(&config.engine),
        ));

        Self { config, invoker }
    }

    /// Bind and serve until the process is terminated.
    pub async fn start(self) -> Result<()> {
        let app_config = AppConfig {
            enable_cors: self.config.http.enable_cors,
            enable_tracing: self.config.http.enable_tracing,
            api_prefix: self.config.http.api_prefix.clone(),
        };
        let prefix = app_config.api_prefix.clone();
        let app = create_rest_app(ScenariosContext::new(self.invoker), app_config);

        let listener = TcpListener::bind(&self.config.http.bind_address)
            .await
            .with_context(|| format!("failed to bind {}", self.config.http.bind_address))?;

        info!("Diaglab scenario server starting");
        info!("Bind Address: {}", self.config.http.bind_address);
        info!("  GET {}/diagscenario/deadlock", prefix);
        info!("  GET {}/diagscenario/memspike/{{seconds}}", prefix);
        info!("  GET {}/diagscenario/memleak/{{kb}}", prefix);
        info!("  GET {}/diagscenario/exception", prefix);
        info!("  GET {}/diagscenario/highcpu/{{milliseconds}}", prefix);

        axum::serve(listener, app).await.context("server error")
    }
}

/// Map the engine configuration domain onto the engine's tuning values.
fn engine_tuning(config: &EngineConfig) -> EngineTuning {
    EngineTuning {
        deadlock: DeadlockTuning {
            establish_grace: config.deadlock.establish_grace,
            amplification_threads: config.deadlock.amplification_threads,
            amplification_hold: config.deadlock.amplification_hold,
        },
        spike: SpikeTuning {
            burst_records: config.spike.burst_records,
            high_plateau: config.spike.high_plateau,
            low_plateau: config.spike.low_plateau,
        },
        leak: LeakTuning {
            records_per_kb: config.leak.records_per_kb,
        },
        cpu: CpuTuning {
            batch_iterations: config.cpu.batch_iterations,
        },
    }
}

fn scenario_limits(config: &EngineConfig) -> ScenarioLimits {
    ScenarioLimits {
        max_spike_duration_secs: config.limits.max_spike_duration_secs,
        max_leak_volume_kb: config.limits.max_leak_volume_kb,
        max_cpu_duration_ms: config.limits.max_cpu_duration_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_tuning_mapping_preserves_values() {
        let mut config = EngineConfig::default();
        config.deadlock.amplification_threads = 42;
        config.spike.burst_records = 1_234;
        config.leak.records_per_kb = 7;
        config.cpu.batch_iterations = 999;

        let tuning = engine_tuning(&config);
        assert_eq!(tuning.deadlock.amplification_threads, 42);
        assert_eq!(tuning.spike.burst_records, 1_234);
        assert_eq!(tuning.leak.records_per_kb, 7);
        assert_eq!(tuning.cpu.batch_iterations, 999);
    }

    #[test]
    fn test_default_limits_mapping() {
        let config = EngineConfig::default();
        let limits = scenario_limits(&config);
        assert_eq!(limits, ScenarioLimits::default());
    }
}
