//! Which user rows a query may return

use crate::entities::User;

/// Row visibility for user queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserScope {
    /// Only `is_deleted = false` rows
    #[default]
    ActiveOnly,
    /// Every row, soft-deleted included
    IncludeDeleted,
}

impl UserScope {
    pub fn includes_deleted(self) -> bool {
        matches!(self, Self::IncludeDeleted)
    }

    /// Whether a user row is visible in this scope
    pub fn admits(self, user: &User) -> bool {
        self.includes_deleted() || !user.is_deleted
    }
}
