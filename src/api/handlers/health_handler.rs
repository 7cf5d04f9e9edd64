//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use sea_orm::DbErr;
use serde::Serialize;

use crate::api::AppState;

/// Reported when the database ping fails
const DATABASE_UNREACHABLE: &str = "Database unreachable";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub services: ServiceHealth,
}

/// Individual service health status.
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub database: ServiceStatus,
}

/// Service status with optional error message.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies database connectivity.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = database_status(state.database.ping().await);

    let all_healthy = database.error.is_none();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" },
        services: ServiceHealth { database },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response)).into_response()
}

/// Store errors stay in the log; clients only learn the database is down.
fn database_status(ping: Result<(), DbErr>) -> ServiceStatus {
    match ping {
        Ok(()) => ServiceStatus {
            status: "healthy",
            error: None,
        },
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            ServiceStatus {
                status: "unhealthy",
                error: Some(DATABASE_UNREACHABLE.to_string()),
            }
        }
    }
}
