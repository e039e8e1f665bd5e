//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contact_manager_shared::types::{ErrorDetail, ErrorResponse};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Store or runtime failure. The message is passed through to the caller.
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Rejection for any request that reaches a protected route without a usable token
    pub fn missing_token() -> Self {
        ApiError::Unauthorized("No token provided, authorization denied".to_string())
    }

    /// Rejection for a token that fails verification or points to an unknown user
    pub fn invalid_token() -> Self {
        ApiError::Unauthorized("Token is not valid".to_string())
    }

    pub fn contact_not_found() -> Self {
        ApiError::NotFound("Contact not found".to_string())
    }

    pub fn missing_fields() -> Self {
        ApiError::BadRequest("Please provide all required fields".to_string())
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            ApiError::BadRequest(msg) => ("BAD_REQUEST", msg),
            ApiError::Unauthorized(msg) => ("UNAUTHORIZED", msg),
            ApiError::NotFound(msg) => ("NOT_FOUND", msg),
            ApiError::Conflict(msg) => ("CONFLICT", msg),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                ("INTERNAL_ERROR", err.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
