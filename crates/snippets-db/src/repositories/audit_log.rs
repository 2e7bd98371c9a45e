//! PostgreSQL implementation of AuditLogRepository
//!
//! Insert and select only. Nothing in this crate issues UPDATE or DELETE
//! against `audit_logs`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use snippets_core::entities::{AuditLogEntry, NewAuditLogEntry};
use snippets_core::traits::{AuditFilter, AuditLogRepository, RepoResult};
use snippets_core::value_objects::{Page, PageRequest};

use crate::models::AuditLogModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self, entry), fields(model = %entry.model_name, object_id = %entry.object_id, action = %entry.action))]
    async fn append(&self, entry: &NewAuditLogEntry) -> RepoResult<AuditLogEntry> {
        let row = sqlx::query_as::<_, AuditLogModel>(
            r"
            INSERT INTO audit_logs (user_id, model_name, object_id, action, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, model_name, object_id, action, created_at
            ",
        )
        .bind(entry.user_id)
        .bind(&entry.model_name)
        .bind(&entry.object_id)
        .bind(entry.action.as_str())
        .bind(entry.timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        AuditLogEntry::try_from(row)
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: &AuditFilter,
        page: PageRequest,
    ) -> RepoResult<Page<AuditLogEntry>> {
        let action = filter.action.map(|a| a.as_str());

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM audit_logs
            WHERE ($1::TEXT IS NULL OR model_name = $1)
              AND ($2::TEXT IS NULL OR object_id = $2)
              AND ($3::TEXT IS NULL OR action = $3)
              AND ($4::BIGINT IS NULL OR user_id = $4)
            ",
        )
        .bind(filter.model_name.as_deref())
        .bind(filter.object_id.as_deref())
        .bind(action)
        .bind(filter.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, user_id, model_name, object_id, action, created_at
            FROM audit_logs
            WHERE ($1::TEXT IS NULL OR model_name = $1)
              AND ($2::TEXT IS NULL OR object_id = $2)
              AND ($3::TEXT IS NULL OR action = $3)
              AND ($4::BIGINT IS NULL OR user_id = $4)
            ORDER BY created_at DESC, id DESC
            LIMIT $5 OFFSET $6
            ",
        )
        .bind(filter.model_name.as_deref())
        .bind(filter.object_id.as_deref())
        .bind(action)
        .bind(filter.user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let items = rows
            .into_iter()
            .map(AuditLogEntry::try_from)
            .collect::<RepoResult<Vec<_>>>()?;

        Ok(Page::new(items, total, page))
    }
}
