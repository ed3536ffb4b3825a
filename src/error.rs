//! Error types and error handling for the application
//!
//! Defines the application-level error taxonomy and its conversion to HTTP
//! responses. Every failure rendered to a client is a JSON object with a
//! human-readable `error` field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::members::store::StoreError;

/// Application-level error types
///
/// Each variant maps to exactly one HTTP status via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller input is incomplete or malformed
    #[error("{0}")]
    Validation(String),

    /// No member exists with the requested id
    #[error("Member not found")]
    MemberNotFound,

    /// The requested member_no is already taken by another member
    #[error("Member number already exists")]
    DuplicateMemberNo,

    /// Internal server error (catch-all for storage/connectivity failures)
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::MemberNotFound,
            StoreError::UniqueViolation => AppError::DuplicateMemberNo,
            StoreError::Database(e) => AppError::Internal(anyhow::Error::new(e)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::MemberNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::DuplicateMemberNo => (StatusCode::CONFLICT, self.to_string()),
            AppError::Internal(err) => {
                // Storage detail stays in the logs, never on the wire
                tracing::error!(error = %err, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
