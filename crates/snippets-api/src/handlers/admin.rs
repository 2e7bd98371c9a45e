//! Admin actions

use axum::{extract::State, Json};
use snippets_service::dto::{BulkSoftDeleteRequest, BulkSoftDeleteResponse};
use snippets_service::UserService;

use crate::extractors::{CurrentActor, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Soft delete several users at once (staff only)
///
/// POST /admin/users/soft-delete
pub async fn bulk_soft_delete_users(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ValidatedJson(request): ValidatedJson<BulkSoftDeleteRequest>,
) -> ApiResult<Json<BulkSoftDeleteResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.bulk_soft_delete(&actor, request).await?;
    Ok(Json(response))
}
