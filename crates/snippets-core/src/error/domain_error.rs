//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Snippet not found: {0}")]
    SnippetNotFound(i64),

    #[error("User not found: {0}")]
    UserNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Title too long: max {max} characters")]
    TitleTooLong { max: usize },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("Illegal user state change: {0}")]
    IllegalUserTransition(String),

    #[error("Audit log write failed: {0}")]
    AuditWriteFailed(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the owner of a snippet may modify it")]
    NotSnippetOwner,

    #[error("Staff privileges required")]
    StaffOnly,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("User {0} is already deleted")]
    UserAlreadyDeleted(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::SnippetNotFound(_) => "UNKNOWN_SNIPPET",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::TitleTooLong { .. } => "TITLE_TOO_LONG",
            Self::UnknownLanguage(_) => "UNKNOWN_LANGUAGE",
            Self::UnknownStyle(_) => "UNKNOWN_STYLE",
            Self::IllegalUserTransition(_) => "ILLEGAL_USER_TRANSITION",
            Self::AuditWriteFailed(_) => "AUDIT_LOG_FAILED",

            // Authorization
            Self::NotSnippetOwner => "NOT_SNIPPET_OWNER",
            Self::StaffOnly => "STAFF_ONLY",

            // Conflict
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::UserAlreadyDeleted(_) => "USER_ALREADY_DELETED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::RenderError(_) => "RENDER_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SnippetNotFound(_) | Self::UserNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidUsername(_)
                | Self::TitleTooLong { .. }
                | Self::UnknownLanguage(_)
                | Self::UnknownStyle(_)
                | Self::IllegalUserTransition(_)
                | Self::AuditWriteFailed(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotSnippetOwner | Self::StaffOnly)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyExists | Self::UserAlreadyDeleted(_))
    }

    /// HTTP status matching the classification; infrastructure errors are 500
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authorization() {
            403
        } else if self.is_validation() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }
}
