use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

/// Failures a handler can surface. Everything not listed here (extractor
/// rejections, malformed JSON) is answered by axum before handler code runs.
#[derive(Debug, Error)]
pub enum AppError {
    /// 404 with a plain-text body; an empty message yields a bodiless 404.
    #[error("{0}")]
    NotFound(String),
    /// 400 with a plain-text body.
    #[error("{0}")]
    BadRequest(String),
    /// Any sqlx failure: connectivity, constraint violation, decode. Not
    /// caught anywhere — it reaches this boundary and becomes an opaque 500.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Database(err) => {
                error!(%err, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
