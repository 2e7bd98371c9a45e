//! User service
//!
//! Handles the soft-deletable user accounts. Only staff may change users;
//! destroying a user flags the row instead of removing it.

use std::collections::HashSet;

use chrono::Utc;
use snippets_common::{BootstrapStaffConfig, PasswordService};
use snippets_core::entities::{validate_username, User, UserChanges};
use snippets_core::{AuditAction, DomainError, PageRequest, UserScope};
use tracing::{info, instrument, warn};

use crate::dto::{
    BulkSoftDeleteRequest, BulkSoftDeleteResponse, CreateUserRequest, PaginatedResponse,
    ReplaceUserRequest, UpdateUserRequest, UserResponse,
};

use super::audit::AuditService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::{Actor, PermissionPolicy};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List users visible to the caller
    #[instrument(skip(self, actor))]
    pub async fn list(
        &self,
        actor: &Actor,
        include_deleted: bool,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<UserResponse>> {
        PermissionPolicy::require_authenticated(actor)?;
        let scope = PermissionPolicy::user_scope(actor, include_deleted);

        let page = self.ctx.user_repo().list(scope, page).await?;
        Ok(PaginatedResponse::from_page(page.map(UserResponse::from)))
    }

    /// Get a user visible to the caller
    #[instrument(skip(self, actor))]
    pub async fn get(
        &self,
        actor: &Actor,
        user_id: i64,
        include_deleted: bool,
    ) -> ServiceResult<UserResponse> {
        PermissionPolicy::require_authenticated(actor)?;
        let scope = PermissionPolicy::user_scope(actor, include_deleted);

        let user = self.find(user_id, scope).await?;
        Ok(UserResponse::from(&user))
    }

    /// Create a user (staff only)
    #[instrument(skip(self, actor, request), fields(username = %request.username))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let staff = PermissionPolicy::require_staff(actor)?;

        let mut user = User::new(request.username, request.email);
        user.is_staff = request.is_staff;
        user.is_active = request.is_active;

        let user = self.insert(user, request.password.as_deref()).await?;

        info!(user_id = user.id, created_by = staff.id, "User created");

        AuditService::new(self.ctx)
            .record(Some(staff.id), &user, AuditAction::Create)
            .await?;

        Ok(UserResponse::from(&user))
    }

    /// Full update (PUT, staff only)
    #[instrument(skip(self, actor, request))]
    pub async fn replace(
        &self,
        actor: &Actor,
        user_id: i64,
        include_deleted: bool,
        request: ReplaceUserRequest,
    ) -> ServiceResult<UserResponse> {
        self.apply(actor, user_id, include_deleted, request.into()).await
    }

    /// Partial update (PATCH, staff only); also restores deleted users
    #[instrument(skip(self, actor, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        user_id: i64,
        include_deleted: bool,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        self.apply(actor, user_id, include_deleted, request.into()).await
    }

    /// Soft delete a user (staff only)
    ///
    /// Deleted rows are looked up too, so a repeated destroy reports
    /// `UserAlreadyDeleted` rather than a missing user.
    #[instrument(skip(self, actor))]
    pub async fn destroy(&self, actor: &Actor, user_id: i64) -> ServiceResult<()> {
        let staff = PermissionPolicy::require_staff(actor)?;
        let staff_id = staff.id;

        let mut user = self.find(user_id, UserScope::IncludeDeleted).await?;
        self.soft_delete(staff_id, &mut user).await
    }

    /// Soft delete several users (staff only)
    ///
    /// Unknown and already deleted IDs are skipped.
    #[instrument(skip(self, actor, request), fields(count = request.ids.len()))]
    pub async fn bulk_soft_delete(
        &self,
        actor: &Actor,
        request: BulkSoftDeleteRequest,
    ) -> ServiceResult<BulkSoftDeleteResponse> {
        let staff = PermissionPolicy::require_staff(actor)?;
        let staff_id = staff.id;

        let mut seen = HashSet::new();
        let mut ids = request.ids;
        ids.retain(|id| seen.insert(*id));

        let mut response = BulkSoftDeleteResponse::default();
        for id in ids {
            let user = self
                .ctx
                .user_repo()
                .find_by_id(id, UserScope::IncludeDeleted)
                .await?;
            match user {
                Some(mut user) if !user.is_deleted => {
                    self.soft_delete(staff_id, &mut user).await?;
                    response.deleted.push(id);
                }
                _ => response.skipped.push(id),
            }
        }

        info!(
            deleted = response.deleted.len(),
            skipped = response.skipped.len(),
            "Bulk soft delete finished"
        );
        Ok(response)
    }

    /// Create the configured staff account unless the username is taken
    ///
    /// Returns the new user, or `None` when nothing was created.
    #[instrument(skip(self, config), fields(username = %config.username))]
    pub async fn ensure_staff_account(
        &self,
        config: &BootstrapStaffConfig,
    ) -> ServiceResult<Option<User>> {
        if self.ctx.user_repo().username_exists(&config.username).await? {
            info!("Bootstrap staff account already exists");
            return Ok(None);
        }

        let mut user = User::new(config.username.clone(), config.email.clone());
        user.is_staff = true;
        let user = self.insert(user, Some(&config.password)).await?;

        info!(user_id = user.id, "Bootstrap staff account created");

        AuditService::new(self.ctx)
            .record(None, &user, AuditAction::Create)
            .await?;

        Ok(Some(user))
    }

    // === Helpers ===

    async fn apply(
        &self,
        actor: &Actor,
        user_id: i64,
        include_deleted: bool,
        changes: UserChanges,
    ) -> ServiceResult<UserResponse> {
        let staff = PermissionPolicy::require_staff(actor)?;
        let staff_id = staff.id;
        let scope = PermissionPolicy::user_scope(actor, include_deleted);

        let mut user = self.find(user_id, scope).await?;

        if let Some(ref username) = changes.username {
            if *username != user.username
                && self.ctx.user_repo().username_exists(username).await?
            {
                return Err(DomainError::UsernameAlreadyExists.into());
            }
        }

        let was_deleted = user.is_deleted;
        user.apply_changes(changes)?;
        self.ctx.user_repo().update(&user).await?;

        if was_deleted && !user.is_deleted {
            info!(user_id, restored_by = staff_id, "User restored");
        } else {
            info!(user_id, updated_by = staff_id, "User updated");
        }

        AuditService::new(self.ctx)
            .record(Some(staff_id), &user, AuditAction::Update)
            .await?;

        Ok(UserResponse::from(&user))
    }

    async fn soft_delete(&self, staff_id: i64, user: &mut User) -> ServiceResult<()> {
        let now = Utc::now();
        user.soft_delete(now)?;
        self.ctx.user_repo().soft_delete(user.id, now).await?;

        info!(user_id = user.id, deleted_by = staff_id, "User soft-deleted");

        AuditService::new(self.ctx)
            .record(Some(staff_id), &*user, AuditAction::Destroy)
            .await?;
        Ok(())
    }

    async fn insert(&self, user: User, password: Option<&str>) -> ServiceResult<User> {
        validate_username(&user.username)?;
        if self.ctx.user_repo().username_exists(&user.username).await? {
            warn!(username = %user.username, "Username already in use");
            return Err(DomainError::UsernameAlreadyExists.into());
        }

        let password_hash = PasswordService::new().hash_optional(password)?;
        Ok(self.ctx.user_repo().create(&user, &password_hash).await?)
    }

    async fn find(&self, user_id: i64, scope: UserScope) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id, scope)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }
}
