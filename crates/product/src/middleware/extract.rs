use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use tracing::warn;

pub const INVALID_PRODUCT_ID: &str = "invalid product id";
pub const INVALID_PAYLOAD: &str = "invalid request payload";

/// The `{id}` path segment parsed as a signed 64-bit integer.
#[derive(Debug, Clone, Copy)]
pub struct ProductId(pub i64);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                warn!("⚠️ Missing product id in path: {}", rejection.body_text());
                HttpError::BadRequest(INVALID_PRODUCT_ID.into())
            })?;

        raw.parse::<i64>().map(Self).map_err(|_| {
            warn!("⚠️ Rejected product id {raw:?}");
            HttpError::BadRequest(INVALID_PRODUCT_ID.into())
        })
    }
}

/// JSON body decoded regardless of the request's `Content-Type`.
pub struct PayloadJson<T>(pub T);

impl<S, T> FromRequest<S> for PayloadJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            warn!("⚠️ Could not read request body: {}", rejection.body_text());
            HttpError::BadRequest(INVALID_PAYLOAD.into())
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|err| {
            warn!("⚠️ Rejected request payload: {err}");
            HttpError::BadRequest(INVALID_PAYLOAD.into())
        })?;

        Ok(Self(value))
    }
}
