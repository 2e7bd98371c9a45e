//! Entity to model mappers
//!
//! Conversions between domain entities (snippets-core) and database models.
//! - `From<Model> for Entity` for rows that always map cleanly
//! - `TryFrom<Model>` where a column needs parsing

mod api_token;
mod audit_log;
mod snippet;
mod user;
