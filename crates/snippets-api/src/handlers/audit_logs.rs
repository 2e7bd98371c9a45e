//! Audit log handlers

use axum::{
    extract::{Query, State},
    Json,
};
use snippets_service::dto::{AuditLogQuery, AuditLogResponse, PaginatedResponse};
use snippets_service::AuditService;

use crate::extractors::CurrentActor;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List audit entries, newest first (staff only)
///
/// GET /auditlogs/?model_name=&object_id=&action=&user_id=&page=&page_size=
pub async fn list_audit_logs(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    query: Result<Query<AuditLogQuery>, axum::extract::rejection::QueryRejection>,
) -> ApiResult<Json<PaginatedResponse<AuditLogResponse>>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;
    let service = AuditService::new(state.service_context());
    let response = service.list(&actor, query).await?;
    Ok(Json(response))
}
