//! Diaglab server
//!
//! Combines the scenario engine, configuration and REST surface into one
//! runnable process whose whole purpose is to misbehave on request.

pub mod logging;
pub mod startup;

// Re-export main components
pub use startup::Server;
