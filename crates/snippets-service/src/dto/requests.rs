//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and most implement `Validate`.
//! Rules that need domain knowledge (username characters, known languages)
//! are checked again by the domain layer.

use serde::Deserialize;
use snippets_core::entities::{SnippetChanges, UserChanges};
use snippets_core::traits::AuditFilter;
use snippets_core::AuditAction;
use validator::Validate;

use crate::services::{ServiceError, ServiceResult};

// ============================================================================
// Auth Requests
// ============================================================================

/// Credentials exchanged for a token pair or an API token
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenObtainRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password may not be blank"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Snippet Requests
// ============================================================================

/// Create snippet request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSnippetRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "Title may have at most 100 characters"))]
    pub title: String,

    pub code: String,

    #[serde(default)]
    pub linenos: bool,

    /// Defaults to the configured language
    pub language: Option<String>,

    /// Defaults to the configured style
    pub style: Option<String>,
}

/// Full snippet update (PUT)
///
/// `code` is required; omitted optional fields keep their stored values.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceSnippetRequest {
    #[validate(length(max = 100, message = "Title may have at most 100 characters"))]
    pub title: Option<String>,

    pub code: String,

    pub linenos: Option<bool>,
    pub language: Option<String>,
    pub style: Option<String>,
}

/// Partial snippet update (PATCH)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSnippetRequest {
    #[validate(length(max = 100, message = "Title may have at most 100 characters"))]
    pub title: Option<String>,

    pub code: Option<String>,
    pub linenos: Option<bool>,
    pub language: Option<String>,
    pub style: Option<String>,
}

impl From<ReplaceSnippetRequest> for SnippetChanges {
    fn from(req: ReplaceSnippetRequest) -> Self {
        Self {
            title: req.title,
            code: Some(req.code),
            linenos: req.linenos,
            language: req.language,
            style: req.style,
        }
    }
}

impl From<UpdateSnippetRequest> for SnippetChanges {
    fn from(req: UpdateSnippetRequest) -> Self {
        Self {
            title: req.title,
            code: req.code,
            linenos: req.linenos,
            language: req.language,
            style: req.style,
        }
    }
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request (staff only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// Without a password the account cannot log in
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: Option<String>,

    #[serde(default)]
    pub is_staff: bool,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Full user update (PUT)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceUserRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub is_staff: Option<bool>,
    pub is_active: Option<bool>,
    pub is_deleted: Option<bool>,
}

/// Partial user update (PATCH); `is_deleted: false` restores a deleted user
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub is_staff: Option<bool>,
    pub is_active: Option<bool>,
    pub is_deleted: Option<bool>,
}

impl From<ReplaceUserRequest> for UserChanges {
    fn from(req: ReplaceUserRequest) -> Self {
        Self {
            username: Some(req.username),
            email: req.email,
            is_staff: req.is_staff,
            is_active: req.is_active,
            is_deleted: req.is_deleted,
        }
    }
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            is_staff: req.is_staff,
            is_active: req.is_active,
            is_deleted: req.is_deleted,
        }
    }
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Bulk soft delete of users
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BulkSoftDeleteRequest {
    #[validate(length(min = 1, max = 100, message = "Provide 1-100 user IDs"))]
    pub ids: Vec<i64>,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Page-number pagination parameters
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Audit log listing: pagination plus optional filters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditLogQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub model_name: Option<String>,
    pub object_id: Option<String>,
    pub action: Option<String>,
    pub user_id: Option<i64>,
}

impl AuditLogQuery {
    /// Repository filter for this query
    ///
    /// # Errors
    /// Returns a validation error for an unknown `action`
    pub fn filter(&self) -> ServiceResult<AuditFilter> {
        let action = self
            .action
            .as_deref()
            .filter(|a| !a.is_empty())
            .map(str::parse::<AuditAction>)
            .transpose()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        Ok(AuditFilter {
            model_name: self.model_name.clone().filter(|m| !m.is_empty()),
            object_id: self.object_id.clone().filter(|o| !o.is_empty()),
            action,
            user_id: self.user_id,
        })
    }
}
