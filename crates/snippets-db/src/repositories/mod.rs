//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in snippets-core.

mod api_token;
mod audit_log;
mod error;
mod snippet;
mod user;

pub use api_token::PgApiTokenRepository;
pub use audit_log::PgAuditLogRepository;
pub use snippet::PgSnippetRepository;
pub use user::PgUserRepository;
