//! Snippet service
//!
//! Handles snippet listing, creation, updates and deletion. Every mutation is
//! written first and then reported to the audit service.

use std::collections::HashMap;

use snippets_core::entities::{NewSnippet, Snippet, SnippetChanges};
use snippets_core::{AuditAction, DomainError, Page, PageRequest};
use tracing::{info, instrument};

use crate::dto::{
    CreateSnippetRequest, PaginatedResponse, ReplaceSnippetRequest, SnippetResponse,
    SnippetWithOwner, UpdateSnippetRequest,
};

use super::audit::AuditService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::{Actor, PermissionPolicy};

/// Snippet service
pub struct SnippetService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SnippetService<'a> {
    /// Create a new SnippetService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List snippets in creation order; open to everyone
    #[instrument(skip(self))]
    pub async fn list(&self, page: PageRequest) -> ServiceResult<PaginatedResponse<SnippetResponse>> {
        let page = self.ctx.snippet_repo().list(page).await?;
        let owners = self.owner_names(&page).await?;

        Ok(PaginatedResponse::from_page(page.map(|snippet| {
            let owner = owners.get(&snippet.owner_id).cloned().unwrap_or_default();
            SnippetResponse::from(SnippetWithOwner::new(snippet, owner))
        })))
    }

    /// Get a snippet by ID; open to everyone
    #[instrument(skip(self))]
    pub async fn get(&self, snippet_id: i64) -> ServiceResult<SnippetResponse> {
        let snippet = self.find(snippet_id).await?;
        self.respond(snippet).await
    }

    /// Highlighted HTML document of a snippet
    #[instrument(skip(self))]
    pub async fn highlight(&self, snippet_id: i64) -> ServiceResult<String> {
        Ok(self.find(snippet_id).await?.highlighted)
    }

    /// Create a snippet owned by the caller
    #[instrument(skip(self, actor, request))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateSnippetRequest,
    ) -> ServiceResult<SnippetResponse> {
        let owner = PermissionPolicy::require_authenticated(actor)?;
        let defaults = self.ctx.highlight();

        let draft = NewSnippet {
            title: request.title,
            code: request.code,
            linenos: request.linenos,
            language: request.language.unwrap_or_else(|| defaults.default_language.clone()),
            style: request.style.unwrap_or_else(|| defaults.default_style.clone()),
        };
        let snippet = Snippet::create(owner.id, draft, self.ctx.renderer())?;
        let snippet = self.ctx.snippet_repo().create(&snippet).await?;

        info!(snippet_id = snippet.id, owner_id = owner.id, "Snippet created");

        AuditService::new(self.ctx)
            .record(Some(owner.id), &snippet, AuditAction::Create)
            .await?;

        Ok(SnippetResponse::from(SnippetWithOwner::new(snippet, owner.username.clone())))
    }

    /// Full update (PUT)
    #[instrument(skip(self, actor, request))]
    pub async fn replace(
        &self,
        actor: &Actor,
        snippet_id: i64,
        request: ReplaceSnippetRequest,
    ) -> ServiceResult<SnippetResponse> {
        self.apply(actor, snippet_id, request.into()).await
    }

    /// Partial update (PATCH)
    #[instrument(skip(self, actor, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        snippet_id: i64,
        request: UpdateSnippetRequest,
    ) -> ServiceResult<SnippetResponse> {
        self.apply(actor, snippet_id, request.into()).await
    }

    /// Delete a snippet owned by the caller
    #[instrument(skip(self, actor))]
    pub async fn delete(&self, actor: &Actor, snippet_id: i64) -> ServiceResult<()> {
        let snippet = self.find(snippet_id).await?;
        let owner = PermissionPolicy::require_snippet_owner(actor, &snippet)?;

        self.ctx.snippet_repo().delete(snippet.id).await?;

        info!(snippet_id, owner_id = owner.id, "Snippet deleted");

        AuditService::new(self.ctx)
            .record(Some(owner.id), &snippet, AuditAction::Destroy)
            .await?;

        Ok(())
    }

    // === Helpers ===

    async fn apply(
        &self,
        actor: &Actor,
        snippet_id: i64,
        changes: SnippetChanges,
    ) -> ServiceResult<SnippetResponse> {
        let mut snippet = self.find(snippet_id).await?;
        let owner = PermissionPolicy::require_snippet_owner(actor, &snippet)?;

        snippet.apply_changes(changes, self.ctx.renderer())?;
        self.ctx.snippet_repo().update(&snippet).await?;

        info!(snippet_id, owner_id = owner.id, "Snippet updated");

        AuditService::new(self.ctx)
            .record(Some(owner.id), &snippet, AuditAction::Update)
            .await?;

        Ok(SnippetResponse::from(SnippetWithOwner::new(snippet, owner.username.clone())))
    }

    async fn find(&self, snippet_id: i64) -> ServiceResult<Snippet> {
        self.ctx
            .snippet_repo()
            .find_by_id(snippet_id)
            .await?
            .ok_or_else(|| DomainError::SnippetNotFound(snippet_id).into())
    }

    async fn respond(&self, snippet: Snippet) -> ServiceResult<SnippetResponse> {
        let owners = self.ctx.user_repo().find_by_ids(&[snippet.owner_id]).await?;
        let owner = owners
            .into_iter()
            .next()
            .map(|u| u.username)
            .ok_or_else(|| ServiceError::internal(format!("owner of snippet {} is missing", snippet.id)))?;
        Ok(SnippetResponse::from(SnippetWithOwner::new(snippet, owner)))
    }

    /// Usernames of the owners on a page, keyed by user ID
    async fn owner_names(&self, page: &Page<Snippet>) -> ServiceResult<HashMap<i64, String>> {
        let mut ids: Vec<i64> = page.items.iter().map(|s| s.owner_id).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let users = self.ctx.user_repo().find_by_ids(&ids).await?;
        Ok(users.into_iter().map(|u| (u.id, u.username)).collect())
    }
}
