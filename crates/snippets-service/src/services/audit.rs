//! Audit service
//!
//! Every mutating service operation reports here once its write succeeded.

use std::sync::Arc;

use async_trait::async_trait;
use snippets_core::entities::{AuditLogEntry, Auditable, NewAuditLogEntry};
use snippets_core::traits::{AuditLogRepository, AuditLogger, RepoResult};
use snippets_core::{AuditAction, DomainError, Page};
use tracing::{error, info, instrument};

use crate::dto::{AuditLogQuery, AuditLogResponse, PaginatedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::{Actor, PermissionPolicy};

/// Audit logger that appends straight to the audit repository
#[derive(Clone)]
pub struct RepositoryAuditLogger {
    repo: Arc<dyn AuditLogRepository>,
}

impl RepositoryAuditLogger {
    pub fn new(repo: Arc<dyn AuditLogRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AuditLogger for RepositoryAuditLogger {
    async fn record(&self, entry: NewAuditLogEntry) -> RepoResult<AuditLogEntry> {
        self.repo.append(&entry).await
    }
}

/// Audit service
pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    /// Create a new AuditService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record `action` by `actor` on `subject`
    ///
    /// A failed write is logged and surfaces as `AuditWriteFailed`; the
    /// mutation that preceded it stays in place.
    #[instrument(skip(self, subject), fields(model = subject.model_name(), object_id = %subject.object_id()))]
    pub async fn record<S>(
        &self,
        actor_id: Option<i64>,
        subject: &S,
        action: AuditAction,
    ) -> ServiceResult<AuditLogEntry>
    where
        S: Auditable + Sync + ?Sized,
    {
        let entry = NewAuditLogEntry::for_subject(actor_id, subject, action);
        match self.ctx.audit_logger().record(entry).await {
            Ok(stored) => {
                info!(audit_id = stored.id, action = %action, "Audit entry recorded");
                Ok(stored)
            }
            Err(e) => {
                error!(
                    model = subject.model_name(),
                    object_id = %subject.object_id(),
                    action = %action,
                    error = %e,
                    "Failed to write audit log entry"
                );
                Err(DomainError::AuditWriteFailed(e.to_string()).into())
            }
        }
    }

    /// List audit entries, newest first (staff only)
    #[instrument(skip(self, actor, query))]
    pub async fn list(
        &self,
        actor: &Actor,
        query: AuditLogQuery,
    ) -> ServiceResult<PaginatedResponse<AuditLogResponse>> {
        PermissionPolicy::require_staff(actor)?;

        let filter = query.filter()?;
        let page_request = self.ctx.page_request(query.page, query.page_size)?;
        let page: Page<AuditLogEntry> = self.ctx.audit_repo().list(&filter, page_request).await?;

        Ok(PaginatedResponse::from_page(page.map(AuditLogResponse::from)))
    }
}
