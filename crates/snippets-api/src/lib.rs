//! # snippets-api
//!
//! REST API server built with Axum framework.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{
    bootstrap_staff, create_app, create_app_state, create_configured_app, run, run_server,
};
pub use state::AppState;
