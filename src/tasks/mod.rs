//! Background tasks module
//!
//! One ticker task runs per counter instance, alongside the HTTP server.

pub mod ticker;

// Re-export main functions
pub use ticker::{counter_ticker_task, TICK_PERIOD};
