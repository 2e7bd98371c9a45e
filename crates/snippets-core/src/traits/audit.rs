//! Audit port

use async_trait::async_trait;

use crate::entities::{AuditLogEntry, NewAuditLogEntry};
use crate::traits::RepoResult;

/// Records one audit entry per successful mutation
///
/// Called by the service layer after the mutation has been written.
#[async_trait]
pub trait AuditLogger: Send + Sync {
    async fn record(&self, entry: NewAuditLogEntry) -> RepoResult<AuditLogEntry>;
}
