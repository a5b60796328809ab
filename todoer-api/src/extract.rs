/// Request extractors shared by the handlers
///
/// - `JsonBody`: decodes the body as JSON whatever the `Content-Type`,
///   rejecting with `ApiError::MalformedBody`; `null` reads as the default
/// - `IntParams`: query string integers, lenient: anything missing or
///   unparseable reads as 0, and the first of repeated keys wins

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// JSON request body
///
/// Unlike `axum::Json` this does not insist on an `application/json`
/// content type, and every failure (unreadable body, invalid JSON, wrong
/// field types) rejects with the same error. A literal `null` decodes to
/// `T::default()`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedBody(e.body_text()))?;

        serde_json::from_slice::<Option<T>>(&bytes)
            .map(|value| JsonBody(value.unwrap_or_default()))
            .map_err(|e| ApiError::MalformedBody(e.to_string()))
    }
}

/// Integer query parameters, as raw pairs in query string order
#[derive(Debug, Clone, Default)]
pub struct IntParams(Vec<(String, String)>);

impl IntParams {
    /// First value of `key`, or 0 when absent or not an integer
    pub fn get(&self, key: &str) -> i64 {
        let raw = self
            .0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str());

        parse_int(raw)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for IntParams
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| params)
            .unwrap_or_default();

        Ok(IntParams(params))
    }
}

/// Parses a decimal integer, yielding 0 for anything else
pub fn parse_int(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok()).unwrap_or(0)
}
