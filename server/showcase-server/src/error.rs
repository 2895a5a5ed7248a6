use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use auth_gate::AuthError;
use content_store::StoreError;

/// Standard API error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

/// Main API error enum.
///
/// Handlers catch storage and auth failures locally and translate them here;
/// nothing is retried, and a failure in one collection never touches
/// another.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Storage {
        message: String,
        #[source]
        source: StoreError,
    },

    #[error("Internal server error")]
    Internal { message: String },
}

impl ApiError {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    /// Wrap a storage failure with the endpoint's user-facing message; the
    /// underlying I/O detail goes to the log, not the client.
    pub fn storage(message: impl Into<String>, source: StoreError) -> Self {
        Self::Storage { message: message.into(), source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized | ApiError::InvalidToken | ApiError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Storage { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "unauthorized",
            ApiError::InvalidToken => "invalid_token",
            ApiError::InvalidCredentials => "invalid_credentials",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Validation { .. } => "validation_error",
            ApiError::Storage { .. } => "storage_error",
            ApiError::Internal { .. } => "internal_error",
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::InvalidToken => ApiError::InvalidToken,
            AuthError::Encoding(e) => ApiError::Internal { message: e.to_string() },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        error!(
            error_type = %self.error_type(),
            status_code = %status_code.as_u16(),
            error = %self,
            "API error occurred"
        );
        if let ApiError::Internal { message } = &self {
            error!(detail = %message, "internal error detail");
        }

        let body = ApiErrorResponse {
            error: self.error_type().to_string(),
            message: self.to_string(),
        };

        (status_code, Json(body)).into_response()
    }
}

/// Type alias for API results.
pub type ApiResult<T> = Result<T, ApiError>;
