mod error;
mod handlers;
mod routes;
pub mod security;
mod state;

pub use error::{AppError, AppResult};
pub use state::AppState;

use crate::services::PostStore;
use crate::Config;
use anyhow::Result;
use axum::middleware;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub const API_PREFIX: &str = "/api/v1";

pub fn router(state: Arc<AppState>) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout.max(1));
    let cors = security::cors_layer(&state.config.cors);

    Router::new()
        .nest(API_PREFIX, routes::api_routes())
        .layer(middleware::from_fn(security::apply_security_headers))
        .layer(cors)
        .layer(TimeoutLayer::new(timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: Config, posts: Arc<dyn PostStore>) -> Result<()> {
    let addr = config.bind_address();
    let state = Arc::new(AppState::new(config, posts));
    let app = router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Blog API listening on http://{}{}", addr, API_PREFIX);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
