//! Errors a function can surface to its caller.
//!
//! Handlers return these untouched; only the HTTP edge turns them into the
//! callable error envelope `{ "error": { "status", "message" } }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    InvalidArgument(String),
}

impl FunctionError {
    /// Canonical status name carried in the error envelope
    pub fn status(&self) -> &'static str {
        match self {
            FunctionError::Unauthenticated(_) => "UNAUTHENTICATED",
            FunctionError::InvalidArgument(_) => "INVALID_ARGUMENT",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            FunctionError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            FunctionError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for FunctionError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "status": self.status(),
                "message": self.to_string(),
            }
        });
        (self.status_code(), Json(body)).into_response()
    }
}
