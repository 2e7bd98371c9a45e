//! # snippets-core
//!
//! Domain layer containing entities, value objects, ports (repository, audit and
//! renderer traits), and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    validate_username, ApiToken, AuditLogEntry, Auditable, NewAuditLogEntry, NewSnippet, Snippet,
    SnippetChanges, User, UserChanges, API_TOKEN_LENGTH, DEFAULT_LANGUAGE, DEFAULT_STYLE,
    MAX_TITLE_LENGTH, MAX_USERNAME_LENGTH,
};
pub use error::DomainError;
pub use traits::{
    ApiTokenRepository, AuditFilter, AuditLogRepository, AuditLogger, CodeRenderer, RenderRequest,
    RepoResult, SnippetRepository, UserRepository,
};
pub use value_objects::{
    AuditAction, AuditActionParseError, Capabilities, Page, PageRequest, UserScope,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
