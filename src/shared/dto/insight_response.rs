use serde::{Deserialize, Serialize};

use crate::task_priority::TaskPriority;

/// Raw counts derived from the task collection. Keys are camelCase on the
/// wire, matching what the web clients consume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskAnalytics {
    pub total_tasks: usize,
    pub open_tasks: usize,
    /// Open-task counts in fixed order High, Medium, Low, zero-filled.
    pub priority_distribution: Vec<PriorityCount>,
    pub due_soon: usize,
    pub overdue: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriorityCount {
    pub priority: TaskPriority,
    pub count: usize,
}

impl TaskAnalytics {
    pub fn priority_count(&self, priority: TaskPriority) -> usize {
        self.priority_distribution
            .iter()
            .find(|p| p.priority == priority)
            .map(|p| p.count)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    pub analytics: TaskAnalytics,
    pub summary: String,
    pub detailed_insights: Vec<String>,
}
