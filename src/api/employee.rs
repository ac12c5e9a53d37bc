//! # Employee Endpoint
//!
//! Routes:
//! - POST /api/Employee — validate an employee and echo it back

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use stillwater::Validation;

use super::extract::RecordJson;
use super::AppState;
use crate::employee::Employee;

/// Accepts an employee.
///
/// 200 echoes the record. 400 carries every failure as a structured error
/// object (`propertyName`, `errorMessage`, `attemptedValue`, `errorCode`).
pub async fn create(
    State(state): State<AppState>,
    RecordJson(employee): RecordJson<Employee>,
) -> Response {
    match state.employees.validate(&employee) {
        Validation::Success(()) => {
            tracing::info!(resource = "employee", "record accepted");
            (StatusCode::OK, Json(employee)).into_response()
        }
        Validation::Failure(errors) => {
            tracing::debug!(resource = "employee", errors = errors.len(), "record rejected");
            (StatusCode::BAD_REQUEST, Json(errors)).into_response()
        }
    }
}
