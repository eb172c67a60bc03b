//! Typed, validated JSON bodies.
//!
//! [`ValidJson`] wraps axum's `Json` extractor: decode errors (missing field,
//! wrong JSON type, malformed JSON, wrong content type) and [`Validate`]
//! failures both become [`ApiError::BadRequest`], so no statement runs for a
//! body the database would have to reject.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ApiError;
use tienda_core::Validate;

/// A JSON body that deserialized and passed [`Validate::validate`].
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_owned();

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                warn!(path = %path, reason = %rejection.body_text(), "Rejected request body");
                ApiError::BadRequest(rejection.body_text())
            })?;

        value.validate().map_err(|err| {
            warn!(path = %path, reason = %err, "Request body failed validation");
            ApiError::BadRequest(err.to_string())
        })?;

        Ok(ValidJson(value))
    }
}
