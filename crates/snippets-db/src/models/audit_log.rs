//! Audit log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for audit_logs table
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub model_name: String,
    pub object_id: String,
    /// One of `create`, `update`, `destroy` (CHECK constraint)
    pub action: String,
    pub created_at: DateTime<Utc>,
}
