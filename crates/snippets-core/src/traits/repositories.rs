//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{ApiToken, AuditLogEntry, NewAuditLogEntry, Snippet, User};
use crate::error::DomainError;
use crate::value_objects::{AuditAction, Page, PageRequest, UserScope};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Snippet Repository
// ============================================================================

#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// Find snippet by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Snippet>>;

    /// List snippets ordered by creation time
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Snippet>>;

    /// Insert a snippet and return it with its assigned id
    async fn create(&self, snippet: &Snippet) -> RepoResult<Snippet>;

    /// Update an existing snippet
    async fn update(&self, snippet: &Snippet) -> RepoResult<()>;

    /// Delete a snippet
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID within a visibility scope
    async fn find_by_id(&self, id: i64, scope: UserScope) -> RepoResult<Option<User>>;

    /// Find user by username, whatever its state
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Load several users by ID, whatever their state
    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<User>>;

    /// List users ordered by ID
    async fn list(&self, scope: UserScope, page: PageRequest) -> RepoResult<Page<User>>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Insert a user and return it with its assigned id
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<User>;

    /// Update an existing user, deletion flags included
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Flag an active user as deleted
    async fn soft_delete(&self, id: i64, at: DateTime<Utc>) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

/// Optional filters for audit log listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditFilter {
    pub model_name: Option<String>,
    pub object_id: Option<String>,
    pub action: Option<AuditAction>,
    pub user_id: Option<i64>,
}

impl AuditFilter {
    /// Whether an entry passes every filter that is set
    pub fn matches(&self, entry: &AuditLogEntry) -> bool {
        self.model_name.as_deref().map_or(true, |m| entry.model_name == m)
            && self.object_id.as_deref().map_or(true, |o| entry.object_id == o)
            && self.action.map_or(true, |a| entry.action == a)
            && self.user_id.map_or(true, |u| entry.user_id == Some(u))
    }
}

/// Append-only store; entries can never be changed or removed through it
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Store a new entry
    async fn append(&self, entry: &NewAuditLogEntry) -> RepoResult<AuditLogEntry>;

    /// List entries newest first
    async fn list(&self, filter: &AuditFilter, page: PageRequest)
        -> RepoResult<Page<AuditLogEntry>>;
}

// ============================================================================
// API Token Repository
// ============================================================================

#[async_trait]
pub trait ApiTokenRepository: Send + Sync {
    /// Find token by key
    async fn find_by_key(&self, key: &str) -> RepoResult<Option<ApiToken>>;

    /// Find the token of a user
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<ApiToken>>;

    /// Store a token, or return the existing one if the user already has a token
    async fn create(&self, token: &ApiToken) -> RepoResult<ApiToken>;
}
