//! Response shaping and error mapping.
//!
//! # Design Decisions
//! - Error bodies are plain text, success bodies are JSON
//! - Store errors map by kind: not found → 404, conflicts and bad
//!   credentials → 400
//! - Every upstream failure becomes 500 with a per-query message; the
//!   underlying cause is logged, never returned

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::store::{ErrorKind, Review, StoreError};

/// Errors surfaced at the request boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Upstream call failed; carries the client-facing message.
    #[error("{0}")]
    Upstream(&'static str),

    #[error("Malformed payload")]
    MalformedPayload,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(e) => match e.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Conflict | ErrorKind::InvalidCredentials => StatusCode::BAD_REQUEST,
            },
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MalformedPayload => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        ApiError::MalformedPayload
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Body of a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub username: String,
}

/// Body of a successful review deletion.
#[derive(Debug, Serialize)]
pub struct ReviewDeleted {
    pub message: &'static str,
    pub reviews: Vec<Review>,
}
