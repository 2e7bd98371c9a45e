//! Domain entities - core business objects

mod api_token;
mod audit_log;
mod snippet;
mod user;

pub use api_token::{ApiToken, API_TOKEN_LENGTH};
pub use audit_log::{AuditLogEntry, Auditable, NewAuditLogEntry};
pub use snippet::{NewSnippet, Snippet, SnippetChanges, DEFAULT_LANGUAGE, DEFAULT_STYLE, MAX_TITLE_LENGTH};
pub use user::{validate_username, User, UserChanges, MAX_USERNAME_LENGTH};
