//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use snippets_common::TokenPair;
use snippets_core::entities::{ApiToken, AuditLogEntry, Snippet, User};

use super::responses::{
    ApiTokenResponse, AuditLogResponse, SnippetResponse, TokenPairResponse, UserResponse,
};

/// Path of a user resource
pub fn user_url(id: i64) -> String {
    format!("/users/{id}/")
}

/// Path of a snippet resource
pub fn snippet_url(id: i64) -> String {
    format!("/snippets/{id}/")
}

/// Path of the highlighted rendering of a snippet
pub fn snippet_highlight_url(id: i64) -> String {
    format!("/snippets/{id}/highlight/")
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            url: user_url(user.id),
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_staff: user.is_staff,
            is_active: user.is_active,
            is_deleted: user.is_deleted,
            deleted_at: user.deleted_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Snippet Mappers
// ============================================================================

/// Snippet together with the username of its owner
#[derive(Debug, Clone)]
pub struct SnippetWithOwner {
    pub snippet: Snippet,
    pub owner: String,
}

impl SnippetWithOwner {
    pub fn new(snippet: Snippet, owner: impl Into<String>) -> Self {
        Self {
            snippet,
            owner: owner.into(),
        }
    }
}

impl From<SnippetWithOwner> for SnippetResponse {
    fn from(data: SnippetWithOwner) -> Self {
        let snippet = data.snippet;
        Self {
            url: snippet_url(snippet.id),
            id: snippet.id,
            highlight: snippet_highlight_url(snippet.id),
            title: snippet.title,
            code: snippet.code,
            linenos: snippet.linenos,
            language: snippet.language,
            style: snippet.style,
            owner: data.owner,
        }
    }
}

// ============================================================================
// Audit Mappers
// ============================================================================

impl From<AuditLogEntry> for AuditLogResponse {
    fn from(entry: AuditLogEntry) -> Self {
        Self {
            id: entry.id,
            user: entry.user_id,
            model_name: entry.model_name,
            object_id: entry.object_id,
            action: entry.action,
            timestamp: entry.timestamp,
        }
    }
}

// ============================================================================
// Auth Mappers
// ============================================================================

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type,
            expires_in: pair.expires_in,
        }
    }
}

impl From<ApiToken> for ApiTokenResponse {
    fn from(token: ApiToken) -> Self {
        Self { token: token.key }
    }
}
