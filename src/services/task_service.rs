use chrono::Utc;
use uuid::Uuid;

use crate::api_error::ApiError;
use crate::create_task_request::CreateTaskRequest;
use crate::data_access::data_context::DataContext;
use crate::delete_task_response::DeleteTaskResponse;
use crate::task::Task;
use crate::task_list_query::{SortField, SortOrder, TaskListQuery};
use crate::update_task_request::UpdateTaskRequest;

/// CRUD over task records. Validates and shapes requests, then delegates
/// straight to the store — no retries, no caching.
#[derive(Clone)]
pub struct TaskService {
    data: DataContext,
}

impl TaskService {
    pub fn new(data: DataContext) -> Self {
        TaskService { data }
    }

    /// Create a task, applying defaults for omitted priority/status.
    pub fn create(&self, req: CreateTaskRequest) -> Result<Task, ApiError> {
        let due_date = req
            .due_date
            .ok_or_else(|| ApiError::validation("Due date is required"))?;

        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            title: req
                .title
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            description: req.description.map(|d| d.trim().to_string()),
            priority: req.priority.unwrap_or_default(),
            due_date,
            status: req.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        task.validate()?;

        self.data.create_task(&task)?;
        Ok(task)
    }

    /// All tasks matching the query, filtered then sorted in memory.
    pub fn list(&self, query: &TaskListQuery) -> Result<Vec<Task>, ApiError> {
        let mut tasks = self.data.list_tasks()?;

        if let Some(status) = query.status_filter() {
            tasks.retain(|t| t.status.as_str() == status);
        }
        if let Some(priority) = query.priority_filter() {
            tasks.retain(|t| t.priority.as_str() == priority);
        }

        sort_tasks(&mut tasks, query.sort_field(), query.direction());
        Ok(tasks)
    }

    pub fn get(&self, id: Uuid) -> Result<Task, ApiError> {
        self.data.get_task(id)?.ok_or(ApiError::NotFound)
    }

    /// Apply a partial update. Only the five mutable fields are touched;
    /// the result is re-validated before it overwrites the record.
    pub fn update(&self, id: Uuid, req: UpdateTaskRequest) -> Result<Task, ApiError> {
        let mut task = self.data.get_task(id)?.ok_or(ApiError::NotFound)?;

        if let Some(title) = req.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = req.description {
            task.description = Some(description.trim().to_string());
        }
        if let Some(priority) = req.priority {
            task.priority = priority;
        }
        if let Some(due_date) = req.due_date {
            task.due_date = due_date;
        }
        if let Some(status) = req.status {
            task.status = status;
        }
        task.updated_at = Utc::now();
        task.validate()?;

        self.data.update_task(&task)?;
        Ok(task)
    }

    pub fn delete(&self, id: Uuid) -> Result<DeleteTaskResponse, ApiError> {
        if self.data.delete_task(id)? {
            Ok(DeleteTaskResponse::deleted())
        } else {
            Err(ApiError::NotFound)
        }
    }
}

fn sort_tasks(tasks: &mut [Task], field: SortField, order: SortOrder) {
    tasks.sort_by(|a, b| {
        let ordering = match field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::DueDate => a.due_date.cmp(&b.due_date),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Priority => a.priority.rank().cmp(&b.priority.rank()),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

// ── Tests ──────────────────────────────────────────────────────
