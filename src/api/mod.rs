//! # HTTP API
//!
//! Assembles the record endpoints into one axum router.
//!
//! - `POST /api/Employee` — see [`employee::create`]
//! - `POST /api/Staff` — see [`staff::create`]
//!
//! Resource segments are also routed in lower case (`/api/employee`,
//! `/api/staff`) for clients that normalize paths.

pub mod employee;
pub mod error;
pub mod extract;
pub mod staff;
pub mod state;

use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use extract::RecordJson;
pub use state::AppState;

/// Creates the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/Employee", post(employee::create))
        .route("/api/employee", post(employee::create))
        .route("/api/Staff", post(staff::create))
        .route("/api/staff", post(staff::create))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
