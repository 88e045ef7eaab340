use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use sqlx::SqlitePool;

use crate::services::health_service::{self, HealthReport};

/// Liveness probe. Storage failures become a 503 body, never an error page.
pub async fn health_handler(State(pool): State<SqlitePool>) -> (StatusCode, Json<HealthReport>) {
    let report = health_service::check_health(&pool, Utc::now()).await;
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}
