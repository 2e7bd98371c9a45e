//! Value objects - immutable types that represent domain concepts

mod audit_action;
mod capabilities;
mod pagination;
mod user_scope;

pub use audit_action::{AuditAction, AuditActionParseError};
pub use capabilities::Capabilities;
pub use pagination::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use user_scope::UserScope;
