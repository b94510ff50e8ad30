//! Diaglab scenario engine
//!
//! Reproduces specific production incident classes on demand, inside the
//! running process, so operators can practice capturing diagnostic artifacts
//! (thread dumps, memory dumps, CPU traces) against a live misbehaving
//! target:
//! - a two-lock reversed-order deadlock, amplified by a burst of blocked
//!   worker threads
//! - unbounded memory growth into a process-wide transaction cache
//! - a repeating memory spike-and-release cycle
//! - CPU saturation on a dedicated thread
//! - an unconditional unhandled crash
//!
//! All scenario work runs on OS-level preemptive threads; the artifacts
//! depend on real kernel thread states and would not survive a cooperative
//! scheduling substitute.

pub mod cache;
pub mod error;
pub mod invoker;
pub mod locks;
pub mod scenario;
pub mod tuning;
pub mod worker;

// Re-export main types
pub use cache::{Record, TransactionCache};
pub use error::{ScenarioError, ScenarioResult};
pub use invoker::{ScenarioInvoker, ScenarioKind, ScenarioRequest};
pub use locks::LockPair;
pub use tuning::{CpuTuning, DeadlockTuning, EngineTuning, LeakTuning, ScenarioLimits, SpikeTuning};
pub use worker::WorkerPool;
