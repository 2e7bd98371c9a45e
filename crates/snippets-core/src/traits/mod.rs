//! Ports - interfaces the domain needs from the outside world

mod audit;
mod render;
mod repositories;

pub use audit::AuditLogger;
pub use render::{CodeRenderer, RenderRequest};
pub use repositories::{
    ApiTokenRepository, AuditFilter, AuditLogRepository, RepoResult, SnippetRepository,
    UserRepository,
};
