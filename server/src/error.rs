use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// The only failure class a caller can see: any internal problem surfaces
/// as one generic handler-level error, never partial results.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Search function error")]
    Store(#[from] redis::RedisError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
