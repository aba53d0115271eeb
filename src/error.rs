use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),
    #[error("cache unavailable: {0}")]
    CacheUnavailable(#[from] redis::RedisError),
    #[error("{0}")]
    Validation(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    code: i32,
    error_message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::StoreUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "database unavailable".to_string())
            }
            AppError::CacheUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "cache unavailable".to_string())
            }
            AppError::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };

        let body = Json(ErrorResponse {
            code: status.as_u16() as i32,
            error_message,
        });

        (status, body).into_response()
    }
}
