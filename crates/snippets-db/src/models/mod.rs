//! Database models - SQLx-compatible structs for PostgreSQL tables

mod api_token;
mod audit_log;
mod snippet;
mod user;

pub use api_token::ApiTokenModel;
pub use audit_log::AuditLogModel;
pub use snippet::SnippetModel;
pub use user::UserModel;
