//! # snippets-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    Actor, AuditService, AuthService, PermissionPolicy, RepositoryAuditLogger, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SnippetService, UserService,
};
