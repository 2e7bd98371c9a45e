//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AuditLogQuery, BulkSoftDeleteRequest, CreateSnippetRequest, CreateUserRequest,
    PaginationQuery, RefreshTokenRequest, ReplaceSnippetRequest, ReplaceUserRequest,
    TokenObtainRequest, UpdateSnippetRequest, UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiRootResponse, ApiTokenResponse, AuditLogResponse, BulkSoftDeleteResponse, HealthChecks,
    HealthResponse, PaginatedResponse, ReadinessResponse, SnippetResponse, TokenPairResponse,
    UserResponse,
};

// Re-export mappers and helper structs
pub use mappers::{snippet_highlight_url, snippet_url, user_url, SnippetWithOwner};
