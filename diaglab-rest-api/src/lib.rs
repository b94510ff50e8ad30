//! REST surface for triggering diagnostic scenarios
//!
//! A thin request router over the scenario invoker: each scenario is one
//! GET route mapping path parameters to a validated invocation and
//! returning the scenario's status token as plain text. The router adds no
//! behavior of its own beyond parameter parsing, error mapping and
//! middleware.

pub mod app;
pub mod context;
pub mod errors;
pub mod handlers;

// Re-export main types
pub use app::{create_rest_app, AppConfig};
pub use context::ScenariosContext;
pub use errors::{RestError, RestResult};
