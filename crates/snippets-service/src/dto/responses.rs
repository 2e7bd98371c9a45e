//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Resource links are paths relative to the API root.

use chrono::{DateTime, Utc};
use serde::Serialize;
use snippets_core::{AuditAction, Page};

// ============================================================================
// Common Response Types
// ============================================================================

/// Page-number paginated list
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// Total number of matching rows
    pub count: i64,
    /// Number of the following page
    pub next: Option<u32>,
    /// Number of the preceding page
    pub previous: Option<u32>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn from_page(page: Page<T>) -> Self {
        Self {
            count: page.total,
            next: page.next_page(),
            previous: page.previous_page(),
            results: page.items,
        }
    }
}

/// Links served at the API root
#[derive(Debug, Clone, Serialize)]
pub struct ApiRootResponse {
    pub users: String,
    pub snippets: String,
}

impl Default for ApiRootResponse {
    fn default() -> Self {
        Self {
            users: "/users/".to_string(),
            snippets: "/snippets/".to_string(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Bearer token pair
#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Opaque API token
#[derive(Debug, Serialize)]
pub struct ApiTokenResponse {
    pub token: String,
}

// ============================================================================
// Snippet Responses
// ============================================================================

/// Snippet representation
#[derive(Debug, Clone, Serialize)]
pub struct SnippetResponse {
    pub url: String,
    pub id: i64,
    pub highlight: String,
    pub title: String,
    pub code: String,
    pub linenos: bool,
    pub language: String,
    pub style: String,
    /// Username of the owner
    pub owner: String,
}

// ============================================================================
// User Responses
// ============================================================================

/// User representation; never carries the password hash
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub url: String,
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Audit Responses
// ============================================================================

/// Audit log entry representation
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogResponse {
    pub id: i64,
    /// Acting user ID
    pub user: Option<i64>,
    pub model_name: String,
    pub object_id: String,
    pub action: AuditAction,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Admin Responses
// ============================================================================

/// Outcome of a bulk soft delete
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkSoftDeleteResponse {
    /// IDs that were soft-deleted by this request
    pub deleted: Vec<i64>,
    /// IDs that were unknown or already deleted
    pub skipped: Vec<i64>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
