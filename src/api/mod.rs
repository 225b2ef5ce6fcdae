//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/stop", post(stop_handler))
        .route("/reset", post(reset_handler))
        // Static route wins over the flag parameter
        .route("/gate/reset", post(gate_reset_handler))
        .route("/gate/:flag", post(gate_toggle_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .route(
            "/reminders",
            get(list_reminders_handler).post(add_reminder_handler),
        )
        .route("/reminders/:id/done", post(complete_reminder_handler))
        .route("/reminders/:id", delete(remove_reminder_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
