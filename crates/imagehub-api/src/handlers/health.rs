//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::state::AppState;

/// Health report.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Seconds since startup.
    pub uptime_seconds: u64,
    /// Database driver status.
    pub database: DriverHealth,
    /// Storage driver status.
    pub storage: DriverHealth,
}

/// Status of one driver.
#[derive(Debug, Clone, Serialize)]
pub struct DriverHealth {
    /// Driver identifier.
    pub driver: String,
    /// Whether the health check passed.
    pub healthy: bool,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = state.factory.database();
    let storage = state.factory.storage();

    let database = DriverHealth {
        driver: database.driver_name().to_string(),
        healthy: database.health_check().await.unwrap_or(false),
    };
    let storage = DriverHealth {
        driver: storage.driver_name().to_string(),
        healthy: storage.health_check().await.unwrap_or(false),
    };

    let healthy = database.healthy && storage.healthy;
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            database,
            storage,
        }),
    )
}
