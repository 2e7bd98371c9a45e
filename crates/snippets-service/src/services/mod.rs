//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, permission checks, auditing and orchestration of domain
//! operations.

pub mod audit;
pub mod auth;
pub mod context;
pub mod error;
pub mod permission;
pub mod snippet;
pub mod user;

// Re-export all services for convenience
pub use audit::{AuditService, RepositoryAuditLogger};
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use permission::{Actor, PermissionPolicy};
pub use snippet::SnippetService;
pub use user::UserService;
