use super::handlers;
use super::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Routes mounted under `/api/v1`. `/blogs/:key` is a slug for GET and a
/// numeric id for PUT/DELETE; the router requires one parameter name per
/// path segment.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/blogs",
            get(handlers::api::list_blogs).post(handlers::api::create_blog),
        )
        .route(
            "/blogs/:key",
            get(handlers::api::get_blog)
                .put(handlers::api::update_blog)
                .delete(handlers::api::delete_blog),
        )
        .route("/health", get(handlers::api::health))
        .route("/accessibility", get(handlers::api::accessibility))
}
