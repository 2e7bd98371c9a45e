//! Route definitions
//!
//! Every collection and resource path is served with and without a trailing
//! slash.

use axum::{
    routing::{get, post, MethodRouter},
    Router,
};

use crate::handlers::{admin, audit_logs, auth, health, root, snippets, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::api_root))
        .merge(auth_routes())
        .merge(snippet_routes())
        .merge(user_routes())
        .merge(audit_routes())
        .merge(admin_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Register `method_router` at `path` both with and without a trailing slash
fn route_both(
    router: Router<AppState>,
    path: &str,
    method_router: MethodRouter<AppState>,
) -> Router<AppState> {
    let bare = path.trim_end_matches('/');
    router
        .route(bare, method_router.clone())
        .route(&format!("{bare}/"), method_router)
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    let router = Router::new();
    let router = route_both(router, "/api/token", post(auth::obtain_token_pair));
    let router = route_both(router, "/api/token/refresh", post(auth::refresh_token));
    route_both(router, "/api-token-auth", post(auth::obtain_api_token))
}

/// Snippet routes
fn snippet_routes() -> Router<AppState> {
    let router = Router::new();
    let router = route_both(
        router,
        "/snippets",
        get(snippets::list_snippets).post(snippets::create_snippet),
    );
    let router = route_both(
        router,
        "/snippets/:id",
        get(snippets::get_snippet)
            .put(snippets::replace_snippet)
            .patch(snippets::update_snippet)
            .delete(snippets::delete_snippet),
    );
    route_both(router, "/snippets/:id/highlight", get(snippets::highlight_snippet))
}

/// User routes
fn user_routes() -> Router<AppState> {
    let router = Router::new();
    let router = route_both(
        router,
        "/users",
        get(users::list_users).post(users::create_user),
    );
    route_both(
        router,
        "/users/:id",
        get(users::get_user)
            .put(users::replace_user)
            .patch(users::update_user)
            .delete(users::delete_user),
    )
}

/// Audit log routes
fn audit_routes() -> Router<AppState> {
    route_both(Router::new(), "/auditlogs", get(audit_logs::list_audit_logs))
}

/// Admin action routes
fn admin_routes() -> Router<AppState> {
    route_both(
        Router::new(),
        "/admin/users/soft-delete",
        post(admin::bulk_soft_delete_users),
    )
}
