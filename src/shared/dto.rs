// Requests
pub mod create_task_request;
pub mod update_task_request;
pub mod task_list_query;

// Responses
pub mod delete_task_response;
pub mod insight_response;
pub mod health_response;
