use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTaskResponse {
    pub message: String,
}

impl DeleteTaskResponse {
    pub fn deleted() -> Self {
        DeleteTaskResponse {
            message: "Task deleted successfully".to_string(),
        }
    }
}
