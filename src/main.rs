//! Uptick - A state-managed HTTP server for elapsed-time counting
//!
//! This is the main entry point for the uptick application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use uptick::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::counter_ticker_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("uptick={},tower_http=info", config.log_level()))
        .init();

    info!("Starting uptick server v0.1.0");
    info!(
        "Configuration: host={}, port={}, reminder latency={}ms",
        config.host, config.port, config.reminder_latency_ms
    );

    // Create application state
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.reminder_latency(),
    ));

    // Start one ticker task per counter variant
    tokio::spawn(counter_ticker_task("counter", Arc::clone(&state.counter)));
    tokio::spawn(counter_ticker_task("gated", state.gated.counter()));

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST   /start              - Start the counter");
    info!("  POST   /stop               - Stop the counter");
    info!("  POST   /reset              - Zero the counter");
    info!("  POST   /gate/:flag         - Toggle a gating condition (okay|safe|cool)");
    info!("  POST   /gate/reset         - Zero the gated counter");
    info!("  GET    /status             - Check counters, errors and uptime");
    info!("  GET    /health             - Health check");
    info!("  GET    /reminders          - List reminders");
    info!("  POST   /reminders          - Add a reminder");
    info!("  POST   /reminders/:id/done - Complete a reminder");
    info!("  DELETE /reminders/:id      - Remove a reminder");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
