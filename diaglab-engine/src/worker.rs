//! Worker pool for scenario threads

use std::thread::{self, JoinHandle};

use crate::error::{ScenarioError, ScenarioResult};

/// Records a handle to every spawned scenario thread and joins them all.
///
/// Threads are named so they can be identified in a thread dump. `join_all`
/// blocks the calling thread until every worker finishes; for the deadlock
/// scenario that is forever, and the engine's own calling thread becoming
/// permanently blocked there is correct behavior, not a defect.
#[derive(Debug, Default)]
pub struct WorkerPool {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a named worker thread and record its handle.
    pub fn spawn<F>(&mut self, name: impl Into<String>, f: F) -> ScenarioResult<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = thread::Builder::new().name(name.into()).spawn(f)?;
        self.handles.push(handle);
        Ok(())
    }

    /// Number of workers spawned so far.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Join every spawned worker, blocking until all of them finish.
    pub fn join_all(self) -> ScenarioResult<()> {
        for handle in self.handles {
            let name = handle
                .thread()
                .name()
                .unwrap_or("<unnamed>")
                .to_string();
            handle
                .join()
                .map_err(|_| ScenarioError::WorkerPanicked(name))?;
        }
        Ok(())
    }
}
