use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// automatically mapping different error types to appropriate HTTP status codes
/// and formatting them as JSON responses. Internal failures carry a fixed
/// public message per operation; the underlying cause is logged server-side
/// and never returned to the client.
#[derive(Debug)]
pub enum ApiError {
    /// Course id path parameter is absent or empty
    MissingId,
    /// Course id path parameter is not a valid integer
    InvalidId,
    /// No course matches the requested id
    NotFound,
    /// Store/connection/parsing failure not otherwise classified
    Internal {
        public: &'static str,
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(public: &'static str, source: anyhow::Error) -> Self {
        ApiError::Internal { public, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::MissingId => (
                StatusCode::BAD_REQUEST,
                "Missing course ID.".to_string(),
            ),
            ApiError::InvalidId => (
                StatusCode::BAD_REQUEST,
                "Invalid course ID format.".to_string(),
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                "Course not found.".to_string(),
            ),
            ApiError::Internal { public, source } => {
                tracing::error!("{} Cause: {:#}", public, source);
                (StatusCode::INTERNAL_SERVER_ERROR, public.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
