//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::services::ReminderService;
use super::{CounterCell, CounterSnapshot, GateFlag, GatedCell, GatedSnapshot};

/// Main application state: the two counter variants, the fake reminders
/// backend, and server metadata. Constructed once by the composition root
/// and passed down explicitly as an `Arc`.
#[derive(Debug)]
pub struct AppState {
    /// Direct variant, driven by start/stop
    pub counter: Arc<CounterCell>,
    /// Gated variant, driven by the three-flag conjunction
    pub gated: Arc<GatedCell>,
    /// In-memory fake reminders backend
    pub reminders: ReminderService,
    /// Errors surfaced to clients until cleared
    errors: Mutex<Vec<String>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<String>>,
    last_action_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create a new AppState with default values
    pub fn new(port: u16, host: String, reminder_latency: Duration) -> Self {
        Self {
            counter: Arc::new(CounterCell::new()),
            gated: Arc::new(GatedCell::new()),
            reminders: ReminderService::new(reminder_latency),
            errors: Mutex::new(Vec::new()),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
        }
    }

    /// Record the most recent mutating action for the status endpoint
    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Start the direct counter
    pub fn start_counter(&self) -> Result<CounterSnapshot, String> {
        info!("Starting counter");
        self.record_action("start");
        self.counter.start()
    }

    /// Stop the direct counter
    pub fn stop_counter(&self) -> Result<CounterSnapshot, String> {
        info!("Stopping counter");
        self.record_action("stop");
        self.counter.stop()
    }

    /// Zero the direct counter's elapsed seconds
    pub fn reset_counter(&self) -> Result<CounterSnapshot, String> {
        info!("Resetting counter");
        self.record_action("reset");
        self.counter.reset()
    }

    /// Toggle one gating condition on the gated counter
    pub fn toggle_gate(&self, flag: GateFlag) -> Result<GatedSnapshot, String> {
        self.record_action(flag.as_str());
        self.gated.toggle(flag)
    }

    /// Zero the gated counter's elapsed seconds
    pub fn reset_gated(&self) -> Result<GatedSnapshot, String> {
        info!("Resetting gated counter");
        self.record_action("gate-reset");
        self.gated.reset()
    }

    /// Get the direct counter snapshot
    pub fn counter_snapshot(&self) -> Result<CounterSnapshot, String> {
        self.counter.snapshot()
    }

    /// Get the gated counter snapshot with its flags
    pub fn gated_snapshot(&self) -> Result<GatedSnapshot, String> {
        self.gated.snapshot()
    }

    /// Add an error for client visibility
    pub fn add_error(&self, error: String) {
        warn!("Adding error to state: {}", error);
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(error);
        }
    }

    /// Clear errors mentioning a specific component
    pub fn clear_errors_for(&self, component: &str) {
        let Ok(mut errors) = self.errors.lock() else {
            return;
        };

        let initial_count = errors.len();
        errors.retain(|error| !error.to_lowercase().contains(&component.to_lowercase()));

        if errors.len() != initial_count {
            info!(
                "Cleared {} errors for component: {}",
                initial_count - errors.len(),
                component
            );
        }
    }

    /// Get the currently surfaced errors
    pub fn get_errors(&self) -> Vec<String> {
        self.errors
            .lock()
            .map(|errors| errors.clone())
            .unwrap_or_default()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
