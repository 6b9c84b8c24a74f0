use crate::services::PostError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

pub enum AppError {
    BadRequest(String),
    Post(PostError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(details) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid request data", "details": details }),
            ),
            Self::Post(PostError::Validation(errors)) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid request data", "details": errors }),
            ),
            Self::Post(PostError::NotFound) => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Blog post not found" }),
            ),
            Self::Post(PostError::Storage(e)) => {
                tracing::error!("Storage failure: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<PostError> for AppError {
    fn from(err: PostError) -> Self {
        Self::Post(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;
