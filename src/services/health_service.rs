use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::warn;

use crate::database::health_repo;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BUILD_ID: &str = env!("PYLADIES_BUILD_ID");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: String,
    pub version: &'static str,
    pub build: &'static str,
    pub database: DatabaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// Storage round trip. Failures end up in the report, never in an `Err`.
pub async fn check_health(pool: &SqlitePool, now: DateTime<Utc>) -> HealthReport {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Micros, true);
    match health_repo::ping(pool).await {
        Ok(()) => HealthReport {
            status: HealthStatus::Healthy,
            timestamp,
            version: VERSION,
            build: BUILD_ID,
            database: DatabaseStatus::Connected,
            error: None,
        },
        Err(e) => {
            warn!("Health check failed: {}", e);
            HealthReport {
                status: HealthStatus::Unhealthy,
                timestamp,
                version: VERSION,
                build: BUILD_ID,
                database: DatabaseStatus::Disconnected,
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;
    use chrono::TimeZone;

    #[tokio::test]
    async fn healthy_when_database_answers() {
        let pool = database::connect_in_memory().await.unwrap();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

        let report = check_health(&pool, now).await;
        assert!(report.is_healthy());
        assert_eq!(report.database, DatabaseStatus::Connected);
        assert_eq!(report.timestamp, "2024-05-01T10:00:00.000000Z");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["database"], "connected");
        assert_eq!(json["version"], VERSION);
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn unhealthy_when_pool_is_closed() {
        let pool = database::connect_in_memory().await.unwrap();
        pool.close().await;

        let report = check_health(&pool, Utc::now()).await;
        assert!(!report.is_healthy());
        assert_eq!(report.database, DatabaseStatus::Disconnected);
        assert!(report.error.is_some());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "unhealthy");
        assert_eq!(json["database"], "disconnected");
    }
}
