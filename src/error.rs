//! Error types for the browser
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Browse Error Enum ==
/// Unified error type for fetching, caching and serving records.
#[derive(Error, Debug)]
pub enum BrowseError {
    /// Category key is not one of the four known categories
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Remote data source answered with a non-success status
    #[error("Failed to fetch items for category: {category} ({status})")]
    UpstreamStatus {
        category: String,
        status: reqwest::StatusCode,
    },

    /// Remote data source could not be reached
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote payload was not a JSON array of records
    #[error("Malformed payload for category {category}: {source}")]
    Decode {
        category: String,
        #[source]
        source: serde_json::Error,
    },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for BrowseError {
    fn into_response(self) -> Response {
        let status = match &self {
            BrowseError::UnknownCategory(_) => StatusCode::NOT_FOUND,
            BrowseError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            BrowseError::UpstreamStatus { .. }
            | BrowseError::Transport(_)
            | BrowseError::Decode { .. } => StatusCode::BAD_GATEWAY,
            BrowseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Validation messages are shown to the user verbatim
        let message = match self {
            BrowseError::InvalidRequest(msg) => msg,
            other => other.to_string(),
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the browser.
pub type Result<T> = std::result::Result<T, BrowseError>;
