use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::api_error::ApiError;
use super::task_priority::TaskPriority;
use super::task_status::TaskStatus;

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// A task — the unit of work tracked by this service.
///
/// `title` and `description` are stored trimmed. Overdue-ness is derived,
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// A task is overdue when its due date has passed and it isn't Done.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Done && now > self.due_date
    }

    /// Field-constraint checks, all in one place. Called on every create
    /// and update before the record is persisted.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.is_empty() {
            return Err(ApiError::validation("Task title is required"));
        }
        if self.title.chars().count() > TITLE_MAX_CHARS {
            return Err(ApiError::validation(
                "Title cannot be more than 100 characters",
            ));
        }
        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_CHARS {
                return Err(ApiError::validation(
                    "Description cannot be more than 500 characters",
                ));
            }
        }
        Ok(())
    }
}
