use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::{
    api_error::ApiError, app_state::SharedState, create_task_request::CreateTaskRequest,
    delete_task_response::DeleteTaskResponse, task::Task, task_list_query::TaskListQuery,
    update_task_request::UpdateTaskRequest,
};

pub struct TaskController {}

impl TaskController {
    pub async fn list(
        State(state): State<SharedState>,
        Query(query): Query<TaskListQuery>,
    ) -> Result<Json<Vec<Task>>, ApiError> {
        let tasks = state.task_service.list(&query)?;
        Ok(Json(tasks))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<Task>, ApiError> {
        let task = state.task_service.get(id)?;
        Ok(Json(task))
    }

    pub async fn create(
        State(state): State<SharedState>,
        Json(body): Json<CreateTaskRequest>,
    ) -> Result<(StatusCode, Json<Task>), ApiError> {
        tracing::debug!(?body, "creating task");
        let task = state.task_service.create(body)?;
        Ok((StatusCode::CREATED, Json(task)))
    }

    /// Serves both PATCH and PUT — a full update is just a partial update
    /// that happens to carry every field.
    pub async fn update(
        State(state): State<SharedState>,
        Path(id): Path<Uuid>,
        Json(body): Json<UpdateTaskRequest>,
    ) -> Result<Json<Task>, ApiError> {
        let task = state.task_service.update(id, body)?;
        Ok(Json(task))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<DeleteTaskResponse>, ApiError> {
        let response = state.task_service.delete(id)?;
        Ok(Json(response))
    }
}
