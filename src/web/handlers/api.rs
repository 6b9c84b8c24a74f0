use crate::models::{CreatePost, ListParams, UpdatePost};
use crate::services::pagination::ListQuery;
use crate::services::posts;
use crate::web::error::{AppError, AppResult};
use crate::web::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

const SERVICE_NAME: &str = "Blogline API";

const ACCESSIBILITY_FEATURES: &[&str] = &[
    "Screen reader optimization",
    "Keyboard navigation",
    "High contrast support",
    "Reduced motion support",
    "Focus management",
    "Semantic HTML",
    "ARIA labels",
];

/// Sets a header, skipping values that are not valid header bytes.
fn set_header(headers: &mut HeaderMap, name: &'static str, value: &str) {
    match HeaderValue::from_bytes(value.as_bytes()) {
        Ok(value) => {
            headers.insert(HeaderName::from_static(name), value);
        }
        Err(_) => tracing::debug!("Skipping header {} with unencodable value", name),
    }
}

fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest("Invalid blog ID".to_string()))
}

/// GET /api/v1/blogs
pub async fn list_blogs(
    State(state): State<Arc<AppState>>,
    params: Option<Query<ListParams>>,
) -> AppResult<Response> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let api = &state.config.api;
    let query = ListQuery::from_params(&params, api.default_page_size, api.max_page_size);

    let page = posts::list_posts(state.store(), &query)?;

    let mut response = Json(&page).into_response();
    let headers = response.headers_mut();
    set_header(headers, "x-total-count", &page.total.to_string());
    set_header(headers, "x-page", &page.page.to_string());
    set_header(headers, "x-per-page", &page.limit.to_string());
    Ok(response)
}

/// GET /api/v1/blogs/:slug
pub async fn get_blog(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> AppResult<Response> {
    let post = posts::get_post_by_slug(state.store(), &slug)?;

    let mut response = Json(&post).into_response();
    let headers = response.headers_mut();
    set_header(headers, "x-meta-title", &post.meta_title);
    set_header(headers, "x-meta-description", &post.meta_description);
    set_header(headers, "x-reading-time", &post.summary.reading_time.to_string());
    Ok(response)
}

/// POST /api/v1/blogs
pub async fn create_blog(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreatePost>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = payload?;
    let post = posts::create_post(state.store(), input, state.config.content.excerpt_length)?;
    Ok((StatusCode::CREATED, Json(post)).into_response())
}

/// PUT /api/v1/blogs/:id
pub async fn update_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePost>, JsonRejection>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    let Json(input) = payload?;
    let post = posts::update_post(state.store(), id, input)?;
    Ok(Json(post).into_response())
}

/// DELETE /api/v1/blogs/:id
pub async fn delete_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    posts::delete_post(state.store(), id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": SERVICE_NAME,
    }))
}

/// GET /api/v1/accessibility
pub async fn accessibility() -> Json<serde_json::Value> {
    Json(json!({
        "wcag_compliance": "AA",
        "features": ACCESSIBILITY_FEATURES,
        "last_audit": Utc::now(),
    }))
}
