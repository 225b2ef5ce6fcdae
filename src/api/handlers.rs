//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::state::{AppState, GateFlag};
use super::responses::{
    AddReminderRequest, ApiResponse, GateResponse, HealthResponse, ReminderListResponse,
    ReminderResponse, StatusResponse,
};

/// Handle POST /start - Start the direct counter
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.start_counter() {
        Ok(counter) => {
            info!("Start endpoint called - counter running");
            Ok(Json(ApiResponse::for_counter(
                "Counter started".to_string(),
                counter,
            )))
        }
        Err(e) => {
            error!("Failed to start counter: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /stop - Stop the direct counter
pub async fn stop_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.stop_counter() {
        Ok(counter) => {
            info!("Stop endpoint called - counter stopped");
            Ok(Json(ApiResponse::for_counter(
                "Counter stopped".to_string(),
                counter,
            )))
        }
        Err(e) => {
            error!("Failed to stop counter: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /reset - Zero the direct counter
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.reset_counter() {
        Ok(counter) => {
            info!("Reset endpoint called - counter zeroed");
            Ok(Json(ApiResponse::for_counter(
                "Counter reset".to_string(),
                counter,
            )))
        }
        Err(e) => {
            error!("Failed to reset counter: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /gate/:flag - Toggle one gating condition
pub async fn gate_toggle_handler(
    State(state): State<Arc<AppState>>,
    Path(flag_name): Path<String>,
) -> Result<Json<GateResponse>, StatusCode> {
    let Some(flag) = GateFlag::from_name(&flag_name) else {
        warn!("Unknown gate flag requested: {}", flag_name);
        return Err(StatusCode::NOT_FOUND);
    };

    match state.toggle_gate(flag) {
        Ok(gated) => {
            info!("Gate endpoint called - {} toggled", flag.as_str());
            Ok(Json(GateResponse::for_gated(
                format!("Gate flag {} toggled", flag.as_str()),
                gated,
            )))
        }
        Err(e) => {
            error!("Failed to toggle gate flag {}: {}", flag.as_str(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /gate/reset - Zero the gated counter
pub async fn gate_reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GateResponse>, StatusCode> {
    match state.reset_gated() {
        Ok(gated) => {
            info!("Gate reset endpoint called - gated counter zeroed");
            Ok(Json(GateResponse::for_gated(
                "Gated counter reset".to_string(),
                gated,
            )))
        }
        Err(e) => {
            error!("Failed to reset gated counter: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return both counters and server metadata
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let counter = match state.counter_snapshot() {
        Ok(snap) => snap,
        Err(e) => {
            error!("Failed to get counter state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let gated = match state.gated_snapshot() {
        Ok(snap) => snap,
        Err(e) => {
            error!("Failed to get gated counter state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        counter,
        gated,
        errors: state.get_errors(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Handle GET /reminders - List all reminders
pub async fn list_reminders_handler(
    State(state): State<Arc<AppState>>,
) -> Json<ReminderListResponse> {
    match state.reminders.list().await {
        Ok(reminders) => Json(ReminderListResponse::ok(reminders)),
        Err(e) => {
            let message = format!("Reminder listing failed: {}", e);
            state.add_error(message.clone());
            Json(ReminderListResponse::error(message))
        }
    }
}

/// Handle POST /reminders - Add a reminder
pub async fn add_reminder_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddReminderRequest>,
) -> Json<ReminderResponse> {
    // A successful call supersedes previously surfaced reminder errors
    state.clear_errors_for("reminder");

    match state.reminders.add(&request.title).await {
        Ok(reminder) => {
            info!("Reminders endpoint called - added {}", reminder.id);
            Json(ReminderResponse::done(
                "Reminder added".to_string(),
                Some(reminder),
            ))
        }
        Err(e) => {
            let message = format!("Reminder add failed: {}", e);
            state.add_error(message.clone());
            Json(ReminderResponse::error(message))
        }
    }
}

/// Handle POST /reminders/:id/done - Mark a reminder complete
pub async fn complete_reminder_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Json<ReminderResponse> {
    state.clear_errors_for("reminder");

    match state.reminders.complete(id).await {
        Ok(reminder) => {
            info!("Reminders endpoint called - completed {}", id);
            Json(ReminderResponse::done(
                "Reminder completed".to_string(),
                Some(reminder),
            ))
        }
        Err(e) => {
            let message = format!("Reminder completion failed: {}", e);
            state.add_error(message.clone());
            Json(ReminderResponse::error(message))
        }
    }
}

/// Handle DELETE /reminders/:id - Remove a reminder
pub async fn remove_reminder_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Json<ReminderResponse> {
    state.clear_errors_for("reminder");

    match state.reminders.remove(id).await {
        Ok(()) => {
            info!("Reminders endpoint called - removed {}", id);
            Json(ReminderResponse::done("Reminder removed".to_string(), None))
        }
        Err(e) => {
            let message = format!("Reminder removal failed: {}", e);
            state.add_error(message.clone());
            Json(ReminderResponse::error(message))
        }
    }
}
