//! Custom Axum extractors
//!
//! Both reject with [`ApiError::Validation`], so a malformed id or body
//! becomes a 400 before any repository call.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::models::{parse_quote_id, ValidationError};
use super::error::ApiError;

/// Extract and validate a quote id from path
pub struct QuoteId(pub i64);

impl<S> FromRequestParts<S> for QuoteId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        Ok(Self(parse_quote_id(&raw)?))
    }
}

/// JSON body whose decoding failures are validation errors
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::InvalidPayload {
                reason: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}
