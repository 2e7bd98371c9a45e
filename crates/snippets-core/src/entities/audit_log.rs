//! Audit log entries - write-once records of mutations

use chrono::{DateTime, Utc};

use crate::entities::{Snippet, User};
use crate::value_objects::AuditAction;

/// A persisted audit record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntry {
    pub id: i64,
    /// Acting user; `None` for system actions or after the user row is gone
    pub user_id: Option<i64>,
    pub model_name: String,
    pub object_id: String,
    pub action: AuditAction,
    pub timestamp: DateTime<Utc>,
}

/// An audit record that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuditLogEntry {
    pub user_id: Option<i64>,
    pub model_name: String,
    pub object_id: String,
    pub action: AuditAction,
    pub timestamp: DateTime<Utc>,
}

impl NewAuditLogEntry {
    /// Record `action` on `subject`, stamped now
    pub fn for_subject<S>(actor_id: Option<i64>, subject: &S, action: AuditAction) -> Self
    where
        S: Auditable + ?Sized,
    {
        Self {
            user_id: actor_id,
            model_name: subject.model_name().to_string(),
            object_id: subject.object_id(),
            action,
            timestamp: Utc::now(),
        }
    }
}

/// Anything whose mutations are audited
pub trait Auditable {
    /// Name stored in `model_name`
    fn model_name(&self) -> &'static str;

    /// Primary key rendered as a string
    fn object_id(&self) -> String;
}

impl Auditable for Snippet {
    fn model_name(&self) -> &'static str {
        "Snippet"
    }

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}

impl Auditable for User {
    fn model_name(&self) -> &'static str {
        "User"
    }

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}
