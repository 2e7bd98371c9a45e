//! Audit log entity <-> model mapper

use snippets_core::entities::AuditLogEntry;
use snippets_core::error::DomainError;
use snippets_core::value_objects::AuditAction;

use crate::models::AuditLogModel;

impl TryFrom<AuditLogModel> for AuditLogEntry {
    type Error = DomainError;

    fn try_from(model: AuditLogModel) -> Result<Self, Self::Error> {
        let action = model
            .action
            .parse::<AuditAction>()
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(AuditLogEntry {
            id: model.id,
            user_id: model.user_id,
            model_name: model.model_name,
            object_id: model.object_id,
            action,
            timestamp: model.created_at,
        })
    }
}
