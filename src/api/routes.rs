//! Router assembly and server bootstrap.

use std::sync::Arc;

use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::TaskStore;

use super::tasks;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub tasks: TaskStore,
}

/// Build the application router.
///
/// Split from [`serve`] so tests can drive the API in-process without
/// binding a socket.
pub fn router(state: Arc<AppState>) -> Router {
    // Unknown GET paths fall through to the client page, like a SPA host.
    let static_dir = state.config.static_dir.clone();
    let client = ServeDir::new(&static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health))
        .nest("/tasks", tasks::routes())
        .fallback_service(client)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        config: config.clone(),
        tasks: TaskStore::new(),
    });
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// GET /health - Liveness probe for the client page's status badge.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
