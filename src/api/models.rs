use crate::store::StoreError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Application state shared across handlers.
///
/// Generic over the category store so tests can inject an in-memory fake.
#[derive(Clone)]
pub struct AppState<S> {
    pub store: S,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Any backend failure while reading categories. Collapsed to a fixed
    /// 500 body; the underlying cause only reaches the server log.
    CategoryFetch(StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::CategoryFetch(err) => {
                error!("Failed to fetch categories: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch categories".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
