//! # Staff Endpoint
//!
//! Routes:
//! - POST /api/Staff — validate a staff member and echo it back

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use stillwater::Validation;

use super::extract::RecordJson;
use super::AppState;
use crate::staff::Staff;

/// Accepts a staff member.
///
/// 200 echoes the record. 400 carries the failure messages only, as a JSON
/// array of strings.
pub async fn create(
    State(state): State<AppState>,
    RecordJson(staff): RecordJson<Staff>,
) -> Response {
    match state.staff.validate(&staff) {
        Validation::Success(()) => {
            tracing::info!(resource = "staff", "record accepted");
            (StatusCode::OK, Json(staff)).into_response()
        }
        Validation::Failure(errors) => {
            tracing::debug!(resource = "staff", errors = errors.len(), "record rejected");
            (StatusCode::BAD_REQUEST, Json(errors.messages())).into_response()
        }
    }
}
