//! Scenario dispatch: the one entry point the request router talks to.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::cache::TransactionCache;
use crate::error::{ScenarioError, ScenarioResult};
use crate::locks::LockPair;
use crate::scenario;
use crate::tuning::{EngineTuning, ScenarioLimits};

/// The scenarios the engine can reproduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    Deadlock,
    MemSpike,
    MemLeak,
    Exception,
    HighCpu,
}

impl ScenarioKind {
    /// Get the string representation of the scenario kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKind::Deadlock => "deadlock",
            ScenarioKind::MemSpike => "memspike",
            ScenarioKind::MemLeak => "memleak",
            ScenarioKind::Exception => "exception",
            ScenarioKind::HighCpu => "highcpu",
        }
    }

    /// Status token returned when the scenario completes.
    ///
    /// The deadlock token is effectively unreachable: its invocation blocks
    /// forever by design before it could be produced.
    pub fn success_token(&self) -> &'static str {
        match self {
            ScenarioKind::Deadlock => "success:deadlock",
            ScenarioKind::MemSpike => "success:memspike",
            ScenarioKind::MemLeak => "success:memleak",
            ScenarioKind::Exception => "success:exception",
            ScenarioKind::HighCpu => "success:highcpu",
        }
    }

    /// Get all supported scenario kinds
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::Deadlock,
            ScenarioKind::MemSpike,
            ScenarioKind::MemLeak,
            ScenarioKind::Exception,
            ScenarioKind::HighCpu,
        ]
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScenarioKind {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deadlock" => Ok(ScenarioKind::Deadlock),
            "memspike" => Ok(ScenarioKind::MemSpike),
            "memleak" => Ok(ScenarioKind::MemLeak),
            "exception" => Ok(ScenarioKind::Exception),
            "highcpu" => Ok(ScenarioKind::HighCpu),
            _ => Err(ScenarioError::invalid_parameter(
                "scenario",
                format!("unknown scenario '{s}'"),
            )),
        }
    }
}

/// A single requested scenario run with its raw numeric parameters.
///
/// Parameters are carried signed so negative caller input stays
/// representable and gets rejected by validation instead of being silently
/// coerced. Ephemeral; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioRequest {
    Deadlock,
    MemSpike { duration_secs: i64 },
    MemLeak { volume_kb: i64 },
    Exception,
    HighCpu { duration_ms: i64 },
}

impl ScenarioRequest {
    pub fn kind(&self) -> ScenarioKind {
        match self {
            ScenarioRequest::Deadlock => ScenarioKind::Deadlock,
            ScenarioRequest::MemSpike { .. } => ScenarioKind::MemSpike,
            ScenarioRequest::MemLeak { .. } => ScenarioKind::MemLeak,
            ScenarioRequest::Exception => ScenarioKind::Exception,
            ScenarioRequest::HighCpu { .. } => ScenarioKind::HighCpu,
        }
    }
}

/// Dispatches validated scenario requests to their implementations.
///
/// Holds the process-wide cache and lock pair by shared reference. State in
/// them accumulates across invocations by design and is never implicitly
/// reset; callers practicing leak diagnostics rely on exactly that. The
/// deadlock dispatch blocks the calling thread forever once its
/// amplification workers are joined, so callers must give every invocation
/// a thread they can afford to lose.
#[derive(Debug, Clone)]
pub struct ScenarioInvoker {
    cache: Arc<TransactionCache>,
    locks: Arc<LockPair>,
    tuning: EngineTuning,
    limits: ScenarioLimits,
}

impl ScenarioInvoker {
    pub fn new(
        cache: Arc<TransactionCache>,
        locks: Arc<LockPair>,
        tuning: EngineTuning,
        limits: ScenarioLimits,
    ) -> Self {
        Self {
            cache,
            locks,
            tuning,
            limits,
        }
    }

    /// Shared handle to the process-wide transaction cache.
    pub fn cache(&self) -> &Arc<TransactionCache> {
        &self.cache
    }

    /// Shared handle to the deadlock lock pair.
    pub fn locks(&self) -> &Arc<LockPair> {
        &self.locks
    }

    /// Validate a request and run its scenario to the natural end,
    /// returning the scenario's status token.
    ///
    /// No retries, no cancellation: every scenario is a single
    /// deterministic attempt.
    pub fn invoke(&self, request: ScenarioRequest) -> ScenarioResult<&'static str> {
        self.validate(&request)?;

        let kind = request.kind();
        info!(scenario = %kind, "scenario starting");

        match request {
            ScenarioRequest::Deadlock => {
                scenario::deadlock::run(&self.locks, &self.tuning.deadlock)?
            }
            ScenarioRequest::MemSpike { duration_secs } => scenario::memspike::run(
                &self.cache,
                Duration::from_secs(duration_secs as u64),
                &self.tuning.spike,
            )?,
            ScenarioRequest::MemLeak { volume_kb } => {
                scenario::memleak::run(&self.cache, volume_kb as u64, &self.tuning.leak)?
            }
            ScenarioRequest::Exception => scenario::crash::run(),
            ScenarioRequest::HighCpu { duration_ms } => scenario::highcpu::run(
                Duration::from_millis(duration_ms as u64),
                &self.tuning.cpu,
            )?,
        }

        info!(scenario = %kind, token = kind.success_token(), "scenario finished");
        Ok(kind.success_token())
    }

    fn validate(&self, request: &ScenarioRequest) -> ScenarioResult<()> {
        match *request {
            ScenarioRequest::Deadlock | ScenarioRequest::Exception => Ok(()),
            ScenarioRequest::MemSpike { duration_secs } => check_range(
                "duration_secs",
                duration_secs,
                self.limits.max_spike_duration_secs,
            ),
            ScenarioRequest::MemLeak { volume_kb } => {
                check_range("volume_kb", volume_kb, self.limits.max_leak_volume_kb)
            }
            ScenarioRequest::HighCpu { duration_ms } => {
                check_range("duration_ms", duration_ms, self.limits.max_cpu_duration_ms)
            }
        }
    }
}

fn check_range(name: &'static str, value: i64, max: i64) -> ScenarioResult<()> {
    if value < 0 {
        warn!(parameter = name, value, "rejecting negative scenario parameter");
        return Err(ScenarioError::invalid_parameter(
            name,
            format!("must be >= 0, got {value}"),
        ));
    }
    if value > max {
        warn!(parameter = name, value, max, "rejecting out-of-range scenario parameter");
        return Err(ScenarioError::invalid_parameter(
            name,
            format!("must be <= {max}, got {value}"),
        ));
    }
    Ok(())
}
