//! Shared helpers for integration tests.
//!
//! Every test gets its own in-memory SQLite database with migrations
//! applied, so tests never see each other's rows.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::ConnectOptions;
use serde_json::Value;
use tower::ServiceExt;

use user_api::api::{create_router, AppState};
use user_api::infra::Database;

/// Connect to a fresh in-memory database and apply migrations.
pub async fn setup_database() -> Arc<Database> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // A single pooled connection keeps the in-memory database alive
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let connection = sea_orm::Database::connect(options)
        .await
        .expect("failed to open in-memory database");

    let db = Database::from_connection(connection);
    db.run_migrations().await.expect("failed to run migrations");

    Arc::new(db)
}

/// Build the full application router over a fresh database.
pub async fn test_app() -> Router {
    create_router(AppState::from_database(setup_database().await))
}

/// Send a request and decode the JSON response body (`Value::Null` when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}

/// A unique email address per call.
pub fn unique_email() -> String {
    format!("{}@test.com", uuid::Uuid::new_v4())
}
