// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for query service operations

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

/// Errors that can occur in query service operations
///
/// Semantic problems with individual events are not errors at this level;
/// they are reported as [`crate::projection::Anomaly`] values and skipped.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Upstream event bus could not be reached
    #[error("Upstream event bus error: {0}")]
    Upstream(String),

    /// Upstream event bus answered with a non-success status
    #[error("Upstream event bus returned status {0}")]
    UpstreamStatus(u16),

    /// Operation timed out
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Listener could not be bound
    #[error("Failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
}

/// Result type for query service operations
pub type QueryResult<T> = Result<T, QueryError>;

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            QueryError::Timeout(err.to_string())
        } else if let Some(status) = err.status() {
            QueryError::UpstreamStatus(status.as_u16())
        } else {
            QueryError::Upstream(err.to_string())
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Serialization(err.to_string())
    }
}

/// Every error reaching the HTTP surface is reported as a generic 500;
/// the detail only goes to the log.
impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Internal server error" })),
        )
            .into_response()
    }
}
