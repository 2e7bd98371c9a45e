//! Service context - dependency container for services
//!
//! Holds the repositories, the audit logger, the renderer and the auth helpers
//! needed by services.

use std::sync::Arc;

use snippets_common::auth::JwtService;
use snippets_common::{HighlightConfig, PaginationConfig};
use snippets_core::traits::{
    ApiTokenRepository, AuditLogRepository, AuditLogger, CodeRenderer, SnippetRepository,
    UserRepository,
};
use snippets_core::PageRequest;
use snippets_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The audit logger every mutation reports to
/// - The code renderer
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    snippet_repo: Arc<dyn SnippetRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,
    api_token_repo: Arc<dyn ApiTokenRepository>,

    // Ports
    audit_logger: Arc<dyn AuditLogger>,
    renderer: Arc<dyn CodeRenderer>,

    // Services
    jwt_service: Arc<JwtService>,

    // Settings
    pagination: PaginationConfig,
    highlight: HighlightConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        snippet_repo: Arc<dyn SnippetRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
        api_token_repo: Arc<dyn ApiTokenRepository>,
        audit_logger: Arc<dyn AuditLogger>,
        renderer: Arc<dyn CodeRenderer>,
        jwt_service: Arc<JwtService>,
        pagination: PaginationConfig,
        highlight: HighlightConfig,
    ) -> Self {
        Self {
            pool,
            user_repo,
            snippet_repo,
            audit_repo,
            api_token_repo,
            audit_logger,
            renderer,
            jwt_service,
            pagination,
            highlight,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run a trivial query to check the database is reachable
    pub async fn ping_database(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the snippet repository
    pub fn snippet_repo(&self) -> &dyn SnippetRepository {
        self.snippet_repo.as_ref()
    }

    /// Get the audit log repository (read side)
    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }

    /// Get the API token repository
    pub fn api_token_repo(&self) -> &dyn ApiTokenRepository {
        self.api_token_repo.as_ref()
    }

    // === Ports ===

    /// Get the audit logger
    pub fn audit_logger(&self) -> &dyn AuditLogger {
        self.audit_logger.as_ref()
    }

    /// Get the code renderer
    pub fn renderer(&self) -> &dyn CodeRenderer {
        self.renderer.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    // === Settings ===

    pub fn pagination(&self) -> &PaginationConfig {
        &self.pagination
    }

    pub fn highlight(&self) -> &HighlightConfig {
        &self.highlight
    }

    /// Build a page request from optional query values, using the configured bounds
    ///
    /// Pages are numbered from 1; `page=0` is rejected.
    pub fn page_request(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> ServiceResult<PageRequest> {
        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(ServiceError::validation("page must be at least 1"));
        }
        Ok(PageRequest::new(
            page,
            page_size.unwrap_or(self.pagination.page_size),
            self.pagination.max_page_size,
        ))
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("pagination", &self.pagination)
            .field("highlight", &self.highlight)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    snippet_repo: Option<Arc<dyn SnippetRepository>>,
    audit_repo: Option<Arc<dyn AuditLogRepository>>,
    api_token_repo: Option<Arc<dyn ApiTokenRepository>>,
    audit_logger: Option<Arc<dyn AuditLogger>>,
    renderer: Option<Arc<dyn CodeRenderer>>,
    jwt_service: Option<Arc<JwtService>>,
    pagination: Option<PaginationConfig>,
    highlight: Option<HighlightConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn snippet_repo(mut self, repo: Arc<dyn SnippetRepository>) -> Self {
        self.snippet_repo = Some(repo);
        self
    }

    pub fn audit_repo(mut self, repo: Arc<dyn AuditLogRepository>) -> Self {
        self.audit_repo = Some(repo);
        self
    }

    pub fn api_token_repo(mut self, repo: Arc<dyn ApiTokenRepository>) -> Self {
        self.api_token_repo = Some(repo);
        self
    }

    /// Override the audit logger; defaults to one writing through `audit_repo`
    pub fn audit_logger(mut self, logger: Arc<dyn AuditLogger>) -> Self {
        self.audit_logger = Some(logger);
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn CodeRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn highlight(mut self, highlight: HighlightConfig) -> Self {
        self.highlight = Some(highlight);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let audit_repo = self
            .audit_repo
            .ok_or_else(|| ServiceError::validation("audit_repo is required"))?;
        let audit_logger = self.audit_logger.unwrap_or_else(|| {
            Arc::new(super::audit::RepositoryAuditLogger::new(Arc::clone(&audit_repo)))
        });

        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.snippet_repo.ok_or_else(|| ServiceError::validation("snippet_repo is required"))?,
            audit_repo,
            self.api_token_repo.ok_or_else(|| ServiceError::validation("api_token_repo is required"))?,
            audit_logger,
            self.renderer.ok_or_else(|| ServiceError::validation("renderer is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.pagination.unwrap_or_default(),
            self.highlight.unwrap_or_default(),
        ))
    }
}
