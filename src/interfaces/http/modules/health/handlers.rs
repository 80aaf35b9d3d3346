//! Liveness and database reachability

use std::time::{Duration, Instant};

use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::Environment;

#[derive(Clone)]
pub struct HealthState {
    pub db: DatabaseConnection,
    pub environment: Environment,
    pub started_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
    Error,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// Unix time of the check, in milliseconds
    pub timestamp: i64,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub database: ComponentHealth,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub status: HealthStatus,
    pub latency_ms: Option<u64>,
}

async fn check_database(db: &DatabaseConnection) -> ComponentHealth {
    let started = Instant::now();
    match db.execute_unprepared("SELECT 1").await {
        Ok(_) => ComponentHealth {
            status: HealthStatus::Ok,
            latency_ms: Some(millis(started.elapsed())),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            ComponentHealth {
                status: HealthStatus::Error,
                latency_ms: None,
            }
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are up", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let database = check_database(&state.db).await;
    let (code, status) = match database.status {
        HealthStatus::Ok => (StatusCode::OK, HealthStatus::Ok),
        _ => (StatusCode::SERVICE_UNAVAILABLE, HealthStatus::Degraded),
    };

    let body = HealthResponse {
        status,
        timestamp: chrono::Utc::now().timestamp_millis(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.environment.as_str().to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        database,
    };
    (code, Json(body))
}
