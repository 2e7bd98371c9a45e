//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, pagination and query flags.

mod auth;
mod include_deleted;
mod pagination;
mod path;
mod validated;

pub use auth::CurrentActor;
pub use include_deleted::IncludeDeleted;
pub use pagination::Pagination;
pub use path::IdPath;
pub use validated::{JsonBody, ValidatedJson};
