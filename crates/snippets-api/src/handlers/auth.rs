//! Authentication handlers
//!
//! Endpoints exchanging credentials for bearer token pairs or API tokens.

use axum::{extract::State, Json};
use snippets_service::dto::{
    ApiTokenResponse, RefreshTokenRequest, TokenObtainRequest, TokenPairResponse,
};
use snippets_service::AuthService;

use crate::extractors::{JsonBody, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Obtain an access/refresh token pair
///
/// POST /api/token/
pub async fn obtain_token_pair(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TokenObtainRequest>,
) -> ApiResult<Json<TokenPairResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.obtain_token_pair(request).await?;
    Ok(Json(response))
}

/// Refresh access token
///
/// POST /api/token/refresh/
pub async fn refresh_token(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RefreshTokenRequest>,
) -> ApiResult<Json<TokenPairResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(request).await?;
    Ok(Json(response))
}

/// Obtain the caller's opaque API token
///
/// POST /api-token-auth/
pub async fn obtain_api_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TokenObtainRequest>,
) -> ApiResult<Json<ApiTokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.obtain_api_token(request).await?;
    Ok(Json(response))
}
