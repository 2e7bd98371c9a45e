//! User handlers
//!
//! Any authenticated caller may read users; only staff may change them.
//! Soft-deleted users are visible to staff with `?include_deleted=true`.

use axum::{extract::State, Json};
use snippets_service::dto::{
    CreateUserRequest, PaginatedResponse, ReplaceUserRequest, UpdateUserRequest, UserResponse,
};
use snippets_service::UserService;

use crate::extractors::{CurrentActor, IdPath, IncludeDeleted, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List users
///
/// GET /users/
pub async fn list_users(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    IncludeDeleted(include_deleted): IncludeDeleted,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list(&actor, include_deleted, page).await?;
    Ok(Json(response))
}

/// Create a user
///
/// POST /users/
pub async fn create_user(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create(&actor, request).await?;
    Ok(Created(Json(response)))
}

/// Get a user
///
/// GET /users/{id}/
pub async fn get_user(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    IdPath(user_id): IdPath,
    IncludeDeleted(include_deleted): IncludeDeleted,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get(&actor, user_id, include_deleted).await?;
    Ok(Json(response))
}

/// Replace a user
///
/// PUT /users/{id}/
pub async fn replace_user(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    IdPath(user_id): IdPath,
    IncludeDeleted(include_deleted): IncludeDeleted,
    ValidatedJson(request): ValidatedJson<ReplaceUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service
        .replace(&actor, user_id, include_deleted, request)
        .await?;
    Ok(Json(response))
}

/// Update some fields of a user, or restore a deleted one
///
/// PATCH /users/{id}/
pub async fn update_user(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    IdPath(user_id): IdPath,
    IncludeDeleted(include_deleted): IncludeDeleted,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service
        .update(&actor, user_id, include_deleted, request)
        .await?;
    Ok(Json(response))
}

/// Soft delete a user
///
/// DELETE /users/{id}/
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    IdPath(user_id): IdPath,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.destroy(&actor, user_id).await?;
    Ok(NoContent)
}
