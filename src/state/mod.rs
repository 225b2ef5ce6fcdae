//! State management module
//!
//! The counter state machine, its gated variant, and the shared
//! application state that owns both.

pub mod counter;
pub mod gate;
pub mod counter_cell;
pub mod gated_cell;
pub mod port;
pub mod app_state;

// Re-export main types
pub use counter::{Counter, CounterSnapshot};
pub use gate::{GateFlag, GateFlags};
pub use counter_cell::CounterCell;
pub use gated_cell::{GatedCell, GatedSnapshot};
pub use port::CounterPort;
pub use app_state::AppState;
