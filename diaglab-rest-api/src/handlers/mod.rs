//! HTTP request handlers

pub mod health;
pub mod scenarios;

pub use health::health_check;
pub use scenarios::{
    trigger_deadlock, trigger_exception, trigger_highcpu, trigger_memleak, trigger_memspike,
};
