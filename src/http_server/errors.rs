//! # API Errors
//!
//! Error types for the client endpoints. Store failures are logged with
//! their cause and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Client API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required field missing or body unreadable
    #[error("{0}")]
    Validation(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store could not serve the request
    #[error("{action}")]
    StoreUnavailable {
        action: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    /// Wrap a store error under a caller-facing message
    pub fn store(action: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| ApiError::StoreUnavailable { action, source }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::StoreUnavailable { action, source } = &self {
            tracing::error!(error = %source, "{}", action);
        }

        let status = self.status_code();
        let body = Json(MessageResponse {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
