//! HTTP server initialization and routing

use axum::routing::get;
use axum::Router;
use log::{error, info};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::shared::state::AppState;
use crate::tasks::configure_task_routes;

use super::{health_check, shutdown_signal};

/// Assemble the full application router. Kept separate from the serve
/// loop so tests can drive the router without binding a socket.
pub fn build_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(configure_task_routes())
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run_axum_server(
    app_state: Arc<AppState>,
    server: &ServerConfig,
) -> std::io::Result<()> {
    let app = build_router(app_state);

    let addr = format!("{}:{}", server.host, server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(
                "Failed to bind to {}: {} - is another instance running?",
                addr, e
            );
            return Err(e);
        }
    };
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(std::io::Error::other)
}
