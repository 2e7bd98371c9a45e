//! Pagination extractor
//!
//! Extracts page-number pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};
use snippets_core::PageRequest;
use snippets_service::dto::PaginationQuery;

use crate::response::ApiError;
use crate::state::AppState;

/// Page request clamped to the configured page size bounds
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let app_state = AppState::from_ref(state);
        let page = app_state
            .service_context()
            .page_request(params.page, params.page_size)
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;
        Ok(Pagination(page))
    }
}
