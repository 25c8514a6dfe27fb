pub mod health_controller;
pub mod insight_controller;
pub mod task_controller;
