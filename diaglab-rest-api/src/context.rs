//! Request context shared by all handlers

use std::sync::Arc;

use diaglab_engine::ScenarioInvoker;

/// Handler state.
///
/// The scenario invoker is the only dependency the router has; everything
/// process-wide (cache, lock pair) lives behind it.
#[derive(Clone)]
pub struct ScenariosContext {
    pub invoker: Arc<ScenarioInvoker>,
}

impl ScenariosContext {
    pub fn new(invoker: Arc<ScenarioInvoker>) -> Self {
        Self { invoker }
    }
}
