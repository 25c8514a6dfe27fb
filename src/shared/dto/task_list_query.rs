use serde::Deserialize;

/// Query string of GET /tasks. All parameters are free-form strings so that
/// empty values (`?status=&priority=`) behave like absent ones instead of
/// failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct TaskListQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    DueDate,
    Title,
    Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl TaskListQuery {
    /// Status filter value, or None when absent, empty, or "all".
    pub fn status_filter(&self) -> Option<&str> {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty() && *s != "all")
    }

    /// Priority filter value, or None when absent or empty. An unknown
    /// value is kept as-is and simply matches no task.
    pub fn priority_filter(&self) -> Option<&str> {
        self.priority.as_deref().filter(|p| !p.is_empty())
    }

    /// Sort field, defaulting to created_at. Accepts snake_case and the
    /// camelCase spellings web clients send.
    pub fn sort_field(&self) -> SortField {
        match self.sort_by.as_deref() {
            Some("updated_at") | Some("updatedAt") => SortField::UpdatedAt,
            Some("due_date") | Some("dueDate") => SortField::DueDate,
            Some("title") => SortField::Title,
            Some("priority") => SortField::Priority,
            _ => SortField::CreatedAt,
        }
    }

    /// Sort direction, defaulting to descending.
    pub fn direction(&self) -> SortOrder {
        match self.sort_order.as_deref() {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}
