use axum::Json;
use serde_json::{json, Value};

use crate::health_response::HealthResponse;

pub struct HealthController {}

impl HealthController {
    pub async fn get() -> Json<HealthResponse> {
        Json(HealthResponse::ok())
    }

    /// Service banner at the root path.
    pub async fn root() -> Json<Value> {
        Json(json!({
            "message": "Task Tracker API is running",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "tasks": "/tasks",
                "insights": "/insights",
                "health": "/health",
            },
        }))
    }
}
