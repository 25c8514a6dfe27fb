use axum::{routing::get, Router};

use crate::{app_state::SharedState, insight_controller::InsightController};

pub const ROUTER_PATH: &str = "/insights";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(InsightController::get))
        .with_state(app_state)
}
