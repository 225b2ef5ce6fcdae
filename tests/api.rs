//! End-to-end tests of the HTTP surface

use std::{sync::Arc, time::Duration};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use uptick::{create_router, AppState};

fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(20554, "127.0.0.1".to_string(), Duration::ZERO))
}

async fn send(app: &Router, method: &str, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = create_router(test_state());

    let response = send(&app, "GET", "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn start_stop_reset_drive_the_direct_counter() {
    let app = create_router(test_state());

    let response = send(&app, "POST", "/start").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "running");
    assert_eq!(body["counter"]["active"], true);

    let body = body_json(send(&app, "POST", "/stop").await).await;
    assert_eq!(body["status"], "stopped");
    assert_eq!(body["counter"]["active"], false);

    let body = body_json(send(&app, "POST", "/reset").await).await;
    assert_eq!(body["counter"]["elapsed_seconds"], 0);
}

#[tokio::test]
async fn status_reflects_both_variants_and_last_action() {
    let state = test_state();
    let app = create_router(Arc::clone(&state));

    send(&app, "POST", "/start").await;
    send(&app, "POST", "/gate/okay").await;

    let body = body_json(send(&app, "GET", "/status").await).await;
    assert_eq!(body["counter"]["active"], true);
    assert_eq!(body["gated"]["counter"]["active"], false);
    assert_eq!(body["gated"]["flags"]["okay"], true);
    assert_eq!(body["gated"]["flags"]["safe"], false);
    assert_eq!(body["last_action"], "okay");
    assert_eq!(body["port"], 20554);
}

#[tokio::test]
async fn gate_opens_only_when_all_flags_are_toggled_on() {
    let app = create_router(test_state());

    let body = body_json(send(&app, "POST", "/gate/okay").await).await;
    assert_eq!(body["status"], "stopped");

    let body = body_json(send(&app, "POST", "/gate/safe").await).await;
    assert_eq!(body["status"], "stopped");

    let body = body_json(send(&app, "POST", "/gate/cool").await).await;
    assert_eq!(body["status"], "running");
    assert_eq!(body["gated"]["counter"]["active"], true);

    // Dropping one flag closes the gate again
    let body = body_json(send(&app, "POST", "/gate/safe").await).await;
    assert_eq!(body["status"], "stopped");
}

#[tokio::test]
async fn unknown_gate_flag_is_not_found() {
    let app = create_router(test_state());

    let response = send(&app, "POST", "/gate/warm").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reminders_crud_round_trip() {
    let app = create_router(test_state());

    let body = body_json(
        send_json(&app, "POST", "/reminders", json!({ "title": "water the plants" })).await,
    )
    .await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["reminder"]["id"], 1);

    send_json(&app, "POST", "/reminders", json!({ "title": "call the dentist" })).await;

    let body = body_json(send(&app, "GET", "/reminders").await).await;
    assert_eq!(body["reminders"].as_array().unwrap().len(), 2);

    let body = body_json(send(&app, "POST", "/reminders/1/done").await).await;
    assert_eq!(body["reminder"]["done"], true);

    let body = body_json(send(&app, "DELETE", "/reminders/2").await).await;
    assert_eq!(body["status"], "ok");

    let body = body_json(send(&app, "GET", "/reminders").await).await;
    assert_eq!(body["reminders"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn rejected_reminder_call_surfaces_as_readable_error_state() {
    let state = test_state();
    let app = create_router(Arc::clone(&state));

    state.reminders.fail_next();
    let body = body_json(
        send_json(&app, "POST", "/reminders", json!({ "title": "doomed" })).await,
    )
    .await;
    assert_eq!(body["status"], "error");

    // The rejection is readable from the status endpoint
    let body = body_json(send(&app, "GET", "/status").await).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().contains("rejected"));

    // The next successful call clears the surfaced error
    let body = body_json(
        send_json(&app, "POST", "/reminders", json!({ "title": "fine" })).await,
    )
    .await;
    assert_eq!(body["status"], "ok");

    let body = body_json(send(&app, "GET", "/status").await).await;
    assert!(body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn completing_a_missing_reminder_reports_an_error_body() {
    let app = create_router(test_state());

    let response = send(&app, "POST", "/reminders/42/done").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("not found"));
}
