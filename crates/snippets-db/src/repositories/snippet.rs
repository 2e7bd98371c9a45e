//! PostgreSQL implementation of SnippetRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use snippets_core::entities::Snippet;
use snippets_core::error::DomainError;
use snippets_core::traits::{RepoResult, SnippetRepository};
use snippets_core::value_objects::{Page, PageRequest};

use crate::models::SnippetModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of SnippetRepository
#[derive(Clone)]
pub struct PgSnippetRepository {
    pool: PgPool,
}

impl PgSnippetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnippetRepository for PgSnippetRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Snippet>> {
        let result = sqlx::query_as::<_, SnippetModel>(
            r"
            SELECT id, created, title, code, linenos, language, style, owner_id, highlighted
            FROM snippets
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Snippet::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Snippet>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM snippets")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, SnippetModel>(
            r"
            SELECT id, created, title, code, linenos, language, style, owner_id, highlighted
            FROM snippets
            ORDER BY created ASC, id ASC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(Snippet::from).collect(),
            total,
            page,
        ))
    }

    #[instrument(skip(self, snippet), fields(owner_id = snippet.owner_id))]
    async fn create(&self, snippet: &Snippet) -> RepoResult<Snippet> {
        let owner_id = snippet.owner_id;
        let row = sqlx::query_as::<_, SnippetModel>(
            r"
            INSERT INTO snippets (created, title, code, linenos, language, style, owner_id, highlighted)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, created, title, code, linenos, language, style, owner_id, highlighted
            ",
        )
        .bind(snippet.created)
        .bind(&snippet.title)
        .bind(&snippet.code)
        .bind(snippet.linenos)
        .bind(&snippet.language)
        .bind(&snippet.style)
        .bind(snippet.owner_id)
        .bind(&snippet.highlighted)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::UserNotFound(owner_id)))?;

        Ok(Snippet::from(row))
    }

    #[instrument(skip(self, snippet), fields(snippet_id = snippet.id))]
    async fn update(&self, snippet: &Snippet) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE snippets
            SET title = $2, code = $3, linenos = $4, language = $5, style = $6, highlighted = $7
            WHERE id = $1
            ",
        )
        .bind(snippet.id)
        .bind(&snippet.title)
        .bind(&snippet.code)
        .bind(snippet.linenos)
        .bind(&snippet.language)
        .bind(&snippet.style)
        .bind(&snippet.highlighted)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SnippetNotFound(snippet.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM snippets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SnippetNotFound(id));
        }

        Ok(())
    }
}
