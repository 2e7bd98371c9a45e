//! Authentication extractor
//!
//! Resolves the caller of a request from `Authorization: Bearer <jwt>` or
//! `Authorization: Token <key>`. The user is reloaded on every request.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use snippets_common::parse_token_header;
use snippets_service::{Actor, AuthService};

use crate::response::ApiError;
use crate::state::AppState;

/// Caller of the request; anonymous when no credentials were sent
///
/// Credentials that are present but invalid reject the request with 401.
#[derive(Debug, Clone)]
pub struct CurrentActor(pub Actor);

impl CurrentActor {
    pub fn actor(&self) -> &Actor {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let auth = AuthService::new(app_state.service_context());

        // Bearer JWT
        if let Ok(TypedHeader(Authorization(bearer))) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        {
            let actor = auth.authenticate_bearer(bearer.token()).await.map_err(|e| {
                tracing::warn!(error = %e, "Bearer authentication failed");
                ApiError::from(e)
            })?;
            return Ok(CurrentActor(actor));
        }

        // Opaque API token
        let Some(value) = parts.headers.get(header::AUTHORIZATION) else {
            return Ok(CurrentActor(Actor::Anonymous));
        };
        let key = value
            .to_str()
            .ok()
            .and_then(parse_token_header)
            .map(str::to_owned)
            .ok_or(ApiError::InvalidAuthFormat)?;

        let actor = auth.authenticate_api_token(&key).await.map_err(|e| {
            tracing::warn!(error = %e, "Token authentication failed");
            ApiError::from(e)
        })?;
        Ok(CurrentActor(actor))
    }
}
