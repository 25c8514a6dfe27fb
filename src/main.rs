use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use tasktracker_server::data_access::data_context::DataContext;
use tasktracker_server::insight_service::InsightService;
use tasktracker_server::task_service::TaskService;
use tasktracker_server::{app_state::AppState, settings::Settings};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // ── Boot the store ─────────────────────────────────────────
    let settings = Settings::load();

    let data_context = DataContext::new(&settings.database_path)
        .expect("Failed to open task database");

    let seeded = data_context.ensure_sample_tasks()
        .expect("Failed to seed sample tasks");
    if seeded > 0 {
        tracing::info!(count = seeded, "seeded sample tasks");
    }

    let task_count = data_context.count_tasks()
        .expect("Failed to count tasks");
    tracing::info!(tasks = task_count, path = %settings.database_path, "store loaded");

    // ── Shared state ───────────────────────────────────────────
    let state = Arc::new(AppState {
        task_service: TaskService::new(data_context.clone()),
        insight_service: InsightService::new(data_context),
    });

    // ── Router ─────────────────────────────────────────────────
    let app = tasktracker_server::map_routes(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // ── Start ──────────────────────────────────────────────────
    let addr: SocketAddr = format!(
        "{}:{}",
        settings.tcp_socket_binding, settings.tcp_socket_port
    )
    .parse()
    .expect("Invalid listen address");

    tracing::info!("Server running on http://localhost:{}", settings.tcp_socket_port);
    tracing::info!("  Tasks:    http://localhost:{}/tasks", settings.tcp_socket_port);
    tracing::info!("  Insights: http://localhost:{}/insights", settings.tcp_socket_port);
    tracing::info!("  Health:   http://localhost:{}/health", settings.tcp_socket_port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
