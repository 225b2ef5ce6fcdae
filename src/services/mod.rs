//! Backend services module
//!
//! Holds the fake reminders backend the HTTP layer talks to.

pub mod reminders;

// Re-export main types
pub use reminders::{Reminder, ReminderService};
