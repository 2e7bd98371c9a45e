//! PostgreSQL implementation of ApiTokenRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use snippets_core::entities::ApiToken;
use snippets_core::error::DomainError;
use snippets_core::traits::{ApiTokenRepository, RepoResult};

use crate::models::ApiTokenModel;

use super::error::{map_db_error, map_foreign_key_violation};

#[derive(Clone)]
pub struct PgApiTokenRepository {
    pool: PgPool,
}

impl PgApiTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApiTokenRepository for PgApiTokenRepository {
    #[instrument(skip(self, key))]
    async fn find_by_key(&self, key: &str) -> RepoResult<Option<ApiToken>> {
        let result = sqlx::query_as::<_, ApiTokenModel>(
            "SELECT key, user_id, created FROM api_tokens WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ApiToken::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<ApiToken>> {
        let result = sqlx::query_as::<_, ApiTokenModel>(
            "SELECT key, user_id, created FROM api_tokens WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ApiToken::from))
    }

    #[instrument(skip(self, token), fields(user_id = token.user_id))]
    async fn create(&self, token: &ApiToken) -> RepoResult<ApiToken> {
        let user_id = token.user_id;
        // The no-op update makes RETURNING yield the existing row on conflict
        let row = sqlx::query_as::<_, ApiTokenModel>(
            r"
            INSERT INTO api_tokens (key, user_id, created)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING key, user_id, created
            ",
        )
        .bind(&token.key)
        .bind(token.user_id)
        .bind(token.created)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::UserNotFound(user_id)))?;

        Ok(ApiToken::from(row))
    }
}
