//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and a JSON error body. Extractor
//! rejections from axum are folded into [`ApiError::InvalidRequest`] so that
//! every validation failure answers with the same shape.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::InvalidPostId;

/// JSON error response body.
///
/// ```json
/// { "detail": "Post not found", "code": 2001 }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub detail: String,
    /// Numeric error code.
    pub code: u32,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status                 |
/// |-----------|------------|-----------------------------|
/// | 1000–1999 | Validation | 422 Unprocessable Entity / 413 Payload Too Large |
/// | 2000–2999 | Not Found  | 404 Not Found               |
/// | 3000–3999 | Server     | 500 Internal Server Error   |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body, query, path or form failed validation.
    #[error("{0}")]
    InvalidRequest(String),

    /// Request body exceeded the configured size limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// No text post has the requested id (kept as sent by the client).
    #[error("Post not found")]
    PostNotFound(String),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::PayloadTooLarge(_) => 1002,
            Self::PostNotFound(_) => 2001,
            Self::Internal(_) => 3000,
            Self::PersistenceError(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::PostNotFound(_) => StatusCode::NOT_FOUND,
            Self::PersistenceError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            code: self.error_code(),
            detail: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::PersistenceError(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<InvalidPostId> for ApiError {
    fn from(err: InvalidPostId) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge(err.body_text());
        }
        Self::InvalidRequest(err.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_uses_fixed_message() {
        let err = ApiError::PostNotFound("42".to_string());
        assert_eq!(err.to_string(), "Post not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), 2001);
    }

    #[test]
    fn validation_maps_to_unprocessable() {
        let err = ApiError::InvalidRequest("limit must be a positive integer".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "limit must be a positive integer");
    }

    #[test]
    fn invalid_post_id_maps_to_unprocessable() {
        let err = ApiError::from(InvalidPostId("abc".to_string()));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Cannot parse `abc` to an integer");
    }

    #[test]
    fn persistence_maps_to_internal() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), 3001);
    }
}
