//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod admin;
pub mod audit_logs;
pub mod auth;
pub mod health;
pub mod root;
pub mod snippets;
pub mod users;
