//! # API Error
//!
//! Request-level failures that happen before a record reaches its validator,
//! mapped to problem-details JSON responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced by the HTTP layer itself.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The body could not be read as JSON of the expected shape.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),
}

impl ApiError {
    /// HTTP status for this error.
    ///
    /// Type mismatches that axum reports as 422 are client errors in the
    /// request body and answer 400 like any other unreadable body. A missing
    /// JSON content type keeps its 415.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(rejection) => match rejection.status() {
                StatusCode::UNPROCESSABLE_ENTITY => StatusCode::BAD_REQUEST,
                status => status,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::MalformedBody(rejection) => rejection.body_text(),
        };
        tracing::debug!(status = status.as_u16(), %detail, "rejecting request body");

        let body = serde_json::json!({
            "type": "about:blank",
            "title": status.canonical_reason().unwrap_or("Bad Request"),
            "status": status.as_u16(),
            "detail": detail,
        });
        (status, axum::Json(body)).into_response()
    }
}
