//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use snippets_core::entities::User;
use snippets_core::error::DomainError;
use snippets_core::traits::{RepoResult, UserRepository};
use snippets_core::value_objects::{Page, PageRequest, UserScope};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
///
/// Scoped queries take `$n::BOOLEAN` "include deleted" flags so one statement
/// serves both visibility scopes.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64, scope: UserScope) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, is_staff, is_active, is_deleted, deleted_at, date_joined
            FROM users
            WHERE id = $1 AND ($2 OR is_deleted = FALSE)
            ",
        )
        .bind(id)
        .bind(scope.includes_deleted())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, is_staff, is_active, is_deleted, deleted_at, date_joined
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, is_staff, is_active, is_deleted, deleted_at, date_joined
            FROM users
            WHERE id = ANY($1)
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn list(&self, scope: UserScope, page: PageRequest) -> RepoResult<Page<User>> {
        let include_deleted = scope.includes_deleted();

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE ($1 OR is_deleted = FALSE)",
        )
        .bind(include_deleted)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, is_staff, is_active, is_deleted, deleted_at, date_joined
            FROM users
            WHERE ($1 OR is_deleted = FALSE)
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(include_deleted)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(rows.into_iter().map(User::from).collect(), total, page))
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, user, password_hash), fields(username = %user.username))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<User> {
        let row = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (username, email, password_hash, is_staff, is_active, date_joined)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, email, is_staff, is_active, is_deleted, deleted_at, date_joined
            ",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(password_hash)
        .bind(user.is_staff)
        .bind(user.is_active)
        .bind(user.date_joined)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UsernameAlreadyExists))?;

        Ok(User::from(row))
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET username = $2, email = $3, is_staff = $4, is_active = $5,
                is_deleted = $6, deleted_at = $7
            WHERE id = $1
            ",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.is_staff)
        .bind(user.is_active)
        .bind(user.is_deleted)
        .bind(user.deleted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UsernameAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: i64, at: DateTime<Utc>) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET is_deleted = TRUE, deleted_at = $2
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            // Either missing or flagged concurrently
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)",
            )
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

            return Err(if exists {
                DomainError::UserAlreadyDeleted(id)
            } else {
                DomainError::UserNotFound(id)
            });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
