//! In-memory fake reminders backend
//!
//! Stands in for a remote reminders service: every call resolves after a
//! configurable simulated latency and can be made to reject on demand, so
//! the request/response error path through the HTTP layer is exercisable
//! without any real backend.

use std::sync::Mutex;
use std::time::Duration;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::{debug, info};

/// A single reminder entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: u64,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
struct ReminderStore {
    next_id: u64,
    items: Vec<Reminder>,
    /// One-shot rejection switch, consumed by the next call
    fail_next: bool,
}

impl ReminderStore {
    fn new() -> Self {
        Self {
            next_id: 1,
            items: Vec::new(),
            fail_next: false,
        }
    }
}

/// Fake reminders service with simulated latency and injectable failure
#[derive(Debug)]
pub struct ReminderService {
    store: Mutex<ReminderStore>,
    latency: Duration,
}

impl ReminderService {
    /// Create a service that resolves each call after `latency`
    pub fn new(latency: Duration) -> Self {
        Self {
            store: Mutex::new(ReminderStore::new()),
            latency,
        }
    }

    /// Arm the service to reject its next call
    pub fn fail_next(&self) {
        if let Ok(mut store) = self.store.lock() {
            store.fail_next = true;
        }
    }

    async fn settle(&self) -> Result<(), String> {
        sleep(self.latency).await;

        let mut store = self
            .store
            .lock()
            .map_err(|e| format!("Failed to lock reminder store: {}", e))?;
        if store.fail_next {
            store.fail_next = false;
            return Err("Reminder backend rejected the call".to_string());
        }
        Ok(())
    }

    /// List all reminders
    pub async fn list(&self) -> Result<Vec<Reminder>, String> {
        self.settle().await?;

        let store = self
            .store
            .lock()
            .map_err(|e| format!("Failed to lock reminder store: {}", e))?;
        debug!("Listing {} reminders", store.items.len());
        Ok(store.items.clone())
    }

    /// Add a reminder with the given title
    pub async fn add(&self, title: &str) -> Result<Reminder, String> {
        self.settle().await?;

        let title = title.trim();
        if title.is_empty() {
            return Err("Reminder title must not be empty".to_string());
        }

        let mut store = self
            .store
            .lock()
            .map_err(|e| format!("Failed to lock reminder store: {}", e))?;

        let reminder = Reminder {
            id: store.next_id,
            title: title.to_string(),
            done: false,
            created_at: Utc::now(),
        };
        store.next_id += 1;
        store.items.push(reminder.clone());

        info!("Added reminder {}: {}", reminder.id, reminder.title);
        Ok(reminder)
    }

    /// Mark a reminder as done
    pub async fn complete(&self, id: u64) -> Result<Reminder, String> {
        self.settle().await?;

        let mut store = self
            .store
            .lock()
            .map_err(|e| format!("Failed to lock reminder store: {}", e))?;

        let reminder = store
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| format!("Reminder {} not found", id))?;

        reminder.done = true;
        info!("Completed reminder {}", id);
        Ok(reminder.clone())
    }

    /// Remove a reminder
    pub async fn remove(&self, id: u64) -> Result<(), String> {
        self.settle().await?;

        let mut store = self
            .store
            .lock()
            .map_err(|e| format!("Failed to lock reminder store: {}", e))?;

        let initial_count = store.items.len();
        store.items.retain(|item| item.id != id);

        if store.items.len() == initial_count {
            return Err(format!("Reminder {} not found", id));
        }

        info!("Removed reminder {}", id);
        Ok(())
    }
}
