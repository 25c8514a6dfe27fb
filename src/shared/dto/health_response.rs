use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub database: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        HealthResponse {
            status: "OK",
            timestamp: Utc::now(),
            database: "redb",
            message: "Task Tracker API is running successfully",
        }
    }
}
