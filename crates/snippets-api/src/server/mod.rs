//! Server setup and initialization
//!
//! Provides the application builders and the server runner.

use std::sync::Arc;

use axum::Router;
use snippets_common::{AppConfig, AppError, JwtService, SyntectRenderer};
use snippets_db::{
    create_pool, run_migrations, PgApiTokenRepository, PgAuditLogRepository,
    PgSnippetRepository, PgUserRepository,
};
use snippets_service::{ServiceContext, ServiceContextBuilder, UserService};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the application with routes and the basic middleware stack
///
/// No rate limiting or CORS; suited to tests driving the router directly.
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    apply_middleware(router).with_state(state)
}

/// Build the application with the full configured middleware stack
///
/// Health routes stay outside the rate limiter.
pub fn create_configured_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        state.is_production(),
    )?;
    let health = apply_middleware(health_routes());
    Ok(api.merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
///
/// Connects to PostgreSQL, applies migrations when enabled and creates the
/// bootstrap staff account when one is configured.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = snippets_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, &config.database.migrations_dir)
            .await
            .map_err(|e| AppError::Database(format!("migrations failed: {e}")))?;
    }

    let jwt_service = Arc::new(JwtService::from_config(&config.jwt));
    let renderer = Arc::new(SyntectRenderer::new());

    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .snippet_repo(Arc::new(PgSnippetRepository::new(pool.clone())))
        .audit_repo(Arc::new(PgAuditLogRepository::new(pool.clone())))
        .api_token_repo(Arc::new(PgApiTokenRepository::new(pool)))
        .renderer(renderer)
        .jwt_service(jwt_service)
        .pagination(config.pagination.clone())
        .highlight(config.highlight.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    bootstrap_staff(&service_context, &config).await?;

    Ok(AppState::new(service_context, config))
}

/// Create the configured staff account if it does not exist yet
pub async fn bootstrap_staff(ctx: &ServiceContext, config: &AppConfig) -> Result<(), AppError> {
    let Some(bootstrap) = config.bootstrap.as_ref() else {
        warn!("No bootstrap staff account configured; user management needs an existing staff user");
        return Ok(());
    };

    UserService::new(ctx)
        .ensure_staff_account(bootstrap)
        .await
        .map_err(AppError::from)?;
    Ok(())
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    let local_addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read local address: {e}")))?;
    info!("Server listening on http://{}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_configured_app(state)?;

    run_server(app, &addr).await
}
