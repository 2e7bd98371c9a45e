//! `include_deleted` query flag

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

#[derive(Debug, Deserialize)]
struct IncludeDeletedParams {
    include_deleted: Option<String>,
}

/// Whether the caller asked to see soft-deleted users
///
/// Accepts `true`/`false`/`1`/`0` in any case; missing means `false`.
/// Whether the flag takes effect is decided by the permission policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncludeDeleted(pub bool);

impl IncludeDeleted {
    pub fn parse(value: &str) -> Result<Self, ApiError> {
        match value.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Self(true)),
            "false" | "0" => Ok(Self(false)),
            _ => Err(ApiError::invalid_query(format!(
                "include_deleted must be true or false, got {value:?}"
            ))),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for IncludeDeleted
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<IncludeDeletedParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        params
            .include_deleted
            .as_deref()
            .map_or(Ok(Self(false)), Self::parse)
    }
}
