pub mod health_routes;
pub mod insight_routes;
pub mod task_routes;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::{app_state::SharedState, health_controller::HealthController};

pub fn map_routes(app_state: SharedState) -> Router {
    Router::new()
        .merge(task_routes::get_router(app_state.clone()))
        .merge(insight_routes::get_router(app_state))
        .merge(health_routes::get_router())
        .route("/", get(HealthController::root))
        .fallback(endpoint_not_found)
}

async fn endpoint_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}
