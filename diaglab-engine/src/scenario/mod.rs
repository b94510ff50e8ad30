//! Scenario implementations
//!
//! One module per reproducible incident class, dispatched by
//! [`ScenarioInvoker`](crate::invoker::ScenarioInvoker). Every scenario runs
//! to its natural end on the calling thread; none support cancellation.

pub mod crash;
pub mod deadlock;
pub mod highcpu;
pub mod memleak;
pub mod memspike;
