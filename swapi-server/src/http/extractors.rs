//! Custom Axum extractors
//!
//! Rejections are turned into `ApiError` so clients always get a
//! `{"msg": ...}` body.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

const NOT_FOUND: &str = "not found";

/// Primary keys are BIGINT; anything above `i64::MAX` cannot exist.
fn to_key(id: u64) -> Result<i64, ApiError> {
    i64::try_from(id).map_err(|_| ApiError::NotFound(NOT_FOUND))
}

/// JSON body whose rejection is reported as a 400 `{"msg": ...}`
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Integer record id from a single-segment path.
///
/// A segment that is not a non-negative integer does not address any
/// record, so it is answered with 404.
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<u64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound(NOT_FOUND))?;
        Ok(Self(to_key(id)?))
    }
}

/// `(user_id, target_id)` pair from a favorites path
pub struct LinkIds {
    pub user_id: i64,
    pub target_id: i64,
}

impl<S> FromRequestParts<S> for LinkIds
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((user_id, target_id)): Path<(u64, u64)> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound(NOT_FOUND))?;
        Ok(Self {
            user_id: to_key(user_id)?,
            target_id: to_key(target_id)?,
        })
    }
}
