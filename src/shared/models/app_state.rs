use std::sync::Arc;

use crate::services::insight_service::InsightService;
use crate::services::task_service::TaskService;

/// Services built once at boot and shared with every handler.
pub struct AppState {
    pub task_service: TaskService,
    pub insight_service: InsightService,
}

pub type SharedState = Arc<AppState>;
