//! Error types for scenario execution

use thiserror::Error;

/// Scenario execution errors
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error("Failed to spawn worker thread: {0}")]
    WorkerSpawn(#[from] std::io::Error),

    #[error("Worker thread panicked: {0}")]
    WorkerPanicked(String),
}

/// Result type for scenario operations
pub type ScenarioResult<T> = Result<T, ScenarioError>;

impl ScenarioError {
    /// Build a parameter validation error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Whether the error was caused by bad caller input rather than an
    /// internal failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
