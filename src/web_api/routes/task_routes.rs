use axum::{routing::get, Router};

use crate::{app_state::SharedState, task_controller::TaskController};

pub const ROUTER_PATH: &str = "/tasks";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(
            ROUTER_PATH,
            get(TaskController::list).post(TaskController::create),
        )
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(TaskController::get)
                .patch(TaskController::update)
                .put(TaskController::update)
                .delete(TaskController::delete),
        )
        .with_state(app_state)
}
