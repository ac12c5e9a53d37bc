//! # Record Extractor
//!
//! JSON body extraction whose rejection is an [`ApiError`].

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Deserializes the request body into a record.
///
/// Behaves like [`axum::Json`] but rejects with a problem-details body instead
/// of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordJson<T>(pub T);

impl<S, T> FromRequest<S> for RecordJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
