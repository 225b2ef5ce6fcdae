//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::Reminder;
use crate::state::{CounterSnapshot, GatedSnapshot};

/// API response structure for direct counter endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub counter: CounterSnapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, counter: CounterSnapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            counter,
        }
    }

    /// Create a response whose status reflects the counter state
    pub fn for_counter(message: String, counter: CounterSnapshot) -> Self {
        let status = if counter.active { "running" } else { "stopped" };
        Self::new(status.to_string(), message, counter)
    }
}

/// Response for gated counter endpoints, carrying the gate flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub gated: GatedSnapshot,
}

impl GateResponse {
    /// Create a response whose status reflects the gated counter state
    pub fn for_gated(message: String, gated: GatedSnapshot) -> Self {
        let status = if gated.counter.active {
            "running"
        } else {
            "stopped"
        };
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            gated,
        }
    }
}

/// Full status response covering both counter variants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub counter: CounterSnapshot,
    pub gated: GatedSnapshot,
    pub errors: Vec<String>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: "0.1.0".to_string(),
        }
    }
}

/// Request body for adding a reminder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddReminderRequest {
    pub title: String,
}

/// Response for single-reminder operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub reminder: Option<Reminder>,
}

impl ReminderResponse {
    /// Create a success response
    pub fn done(message: String, reminder: Option<Reminder>) -> Self {
        Self {
            status: "ok".to_string(),
            message,
            timestamp: Utc::now(),
            reminder,
        }
    }

    /// Create an error response
    pub fn error(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            timestamp: Utc::now(),
            reminder: None,
        }
    }
}

/// Response for listing reminders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderListResponse {
    pub status: String,
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub reminders: Vec<Reminder>,
}

impl ReminderListResponse {
    /// Create a success response
    pub fn ok(reminders: Vec<Reminder>) -> Self {
        Self {
            status: "ok".to_string(),
            message: None,
            timestamp: Utc::now(),
            reminders,
        }
    }

    /// Create an error response with no listing
    pub fn error(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message),
            timestamp: Utc::now(),
            reminders: Vec::new(),
        }
    }
}
