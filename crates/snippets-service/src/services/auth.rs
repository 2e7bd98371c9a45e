//! Authentication service
//!
//! Exchanges credentials for bearer token pairs or opaque API tokens, and
//! resolves the caller of a request from either kind of token.

use snippets_common::auth::{generate_token_key, verify_password};
use snippets_common::AppError;
use snippets_core::entities::{ApiToken, User};
use snippets_core::UserScope;
use tracing::{debug, info, instrument, warn};

use crate::dto::{ApiTokenResponse, RefreshTokenRequest, TokenObtainRequest, TokenPairResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::Actor;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Exchange username and password for an access/refresh token pair
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn obtain_token_pair(
        &self,
        request: TokenObtainRequest,
    ) -> ServiceResult<TokenPairResponse> {
        let user = self.check_credentials(&request.username, &request.password).await?;

        let token_pair = self.ctx.jwt_service().generate_token_pair(user.id)?;

        info!(user_id = user.id, "Token pair issued");
        Ok(TokenPairResponse::from(token_pair))
    }

    /// Exchange a refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<TokenPairResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let user_id = claims.user_id()?;

        let user = self.load_active_user(user_id).await?;
        let token_pair = self.ctx.jwt_service().generate_token_pair(user.id)?;

        info!(user_id = user.id, "Token pair refreshed");
        Ok(TokenPairResponse::from(token_pair))
    }

    /// Exchange username and password for the user's API token
    ///
    /// The token is created on first use and returned unchanged afterwards.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn obtain_api_token(
        &self,
        request: TokenObtainRequest,
    ) -> ServiceResult<ApiTokenResponse> {
        let user = self.check_credentials(&request.username, &request.password).await?;

        if let Some(token) = self.ctx.api_token_repo().find_by_user(user.id).await? {
            return Ok(ApiTokenResponse::from(token));
        }

        let token = ApiToken::new(generate_token_key(), user.id);
        let token = self.ctx.api_token_repo().create(&token).await?;

        info!(user_id = user.id, "API token issued");
        Ok(ApiTokenResponse::from(token))
    }

    /// Resolve the caller from a bearer access token
    #[instrument(skip(self, token))]
    pub async fn authenticate_bearer(&self, token: &str) -> ServiceResult<Actor> {
        let claims = self.ctx.jwt_service().validate_access_token(token)?;
        let user_id = claims.user_id()?;
        let user = self.load_active_user(user_id).await?;
        Ok(Actor::User(user))
    }

    /// Resolve the caller from an opaque API token
    #[instrument(skip(self, key))]
    pub async fn authenticate_api_token(&self, key: &str) -> ServiceResult<Actor> {
        let token = self
            .ctx
            .api_token_repo()
            .find_by_key(key)
            .await?
            .ok_or_else(|| {
                debug!("Unknown API token");
                ServiceError::App(AppError::InvalidToken)
            })?;
        let user = self.load_active_user(token.user_id).await?;
        Ok(Actor::User(user))
    }

    // === Helpers ===

    async fn check_credentials(&self, username: &str, password: &str) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!(username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(password, &password_hash)? {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        if !user.can_authenticate() {
            warn!(user_id = user.id, "Login failed: account disabled or deleted");
            return Err(ServiceError::App(AppError::AccountDisabled));
        }

        Ok(user)
    }

    /// Reload the user behind a token; deleted and inactive accounts are rejected
    async fn load_active_user(&self, user_id: i64) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id, UserScope::ActiveOnly)
            .await?
            .ok_or_else(|| {
                debug!(user_id, "Token refers to a missing or deleted user");
                ServiceError::App(AppError::InvalidToken)
            })?;

        if !user.can_authenticate() {
            return Err(ServiceError::App(AppError::AccountDisabled));
        }
        Ok(user)
    }
}
