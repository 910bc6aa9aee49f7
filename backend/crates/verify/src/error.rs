//! Verify Error Types
//!
//! This module provides verify-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! The HTTP mapping is deliberately flat: the browser client only
//! distinguishes "it worked" from "it did not", so local validation,
//! directory lookups and provider failures all surface as 500. Provider
//! error bodies are passed through to the client unmodified.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde_json::json;
use thiserror::Error;

/// Verify-specific result type alias
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Verify-specific error variants
#[derive(Debug, Error)]
pub enum VerifyError {
    /// User not found in the directory
    #[error("User not found")]
    UserNotFound,

    /// Required request fields absent (checked before any provider call)
    #[error("Missing fields")]
    MissingFields,

    /// Session not found, expired, or carrying no username
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Status poll without a stored approval request id
    #[error("No approval request pending for this session")]
    NoPendingApproval,

    /// Provider answered with a non-success status; body is forwarded as-is
    #[error("Provider request failed")]
    Provider {
        status: Option<u16>,
        body: serde_json::Value,
    },

    /// Transport-level failure talking to the provider
    #[error("Provider transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// User directory lookup failure
    #[error("Directory error: {0}")]
    Directory(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl VerifyError {
    /// Get the HTTP status code for this error
    ///
    /// Everything collapses to 500, including missing input fields.
    /// That mirrors the observed contract of the original service; the
    /// browser client treats any non-200 as "try again".
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InternalServerError
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            VerifyError::Provider { status, body } => {
                tracing::error!(status = ?status, body = %body, "Provider error");
            }
            VerifyError::Transport(e) => {
                tracing::error!(error = %e, "Provider transport error");
            }
            VerifyError::Directory(msg) => {
                tracing::error!(message = %msg, "User directory error");
            }
            VerifyError::Internal(msg) => {
                tracing::error!(message = %msg, "Verify internal error");
            }
            VerifyError::MissingFields => {
                tracing::warn!("Request rejected: missing fields");
            }
            _ => {
                tracing::debug!(error = %self, "Verify error");
            }
        }
    }
}

impl IntoResponse for VerifyError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Raw provider body, unmodified
            VerifyError::Provider { body, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            // Fixed body the browser client matches on
            VerifyError::MissingFields => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Missing fields"})),
            )
                .into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for VerifyError {
    fn from(err: AppError) -> Self {
        VerifyError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_is_500() {
        let errors = [
            VerifyError::UserNotFound,
            VerifyError::MissingFields,
            VerifyError::SessionInvalid,
            VerifyError::NoPendingApproval,
            VerifyError::Provider {
                status: Some(401),
                body: json!({"message": "invalid key"}),
            },
            VerifyError::Directory("boom".into()),
            VerifyError::Internal("boom".into()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.kind(), ErrorKind::InternalServerError);
        }
    }

    #[test]
    fn test_app_error_conversion_keeps_message() {
        let err = VerifyError::Directory("connection refused".into());
        let app = err.to_app_error();
        assert!(app.message().contains("connection refused"));
        assert_eq!(app.status_code(), 500);
    }
}
