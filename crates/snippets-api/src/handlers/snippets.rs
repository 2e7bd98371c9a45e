//! Snippet handlers
//!
//! Reads are open to everyone; writes need an authenticated owner.

use axum::{extract::State, response::Html, Json};
use snippets_service::dto::{
    CreateSnippetRequest, PaginatedResponse, ReplaceSnippetRequest, SnippetResponse,
    UpdateSnippetRequest,
};
use snippets_service::SnippetService;

use crate::extractors::{CurrentActor, IdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List snippets
///
/// GET /snippets/
pub async fn list_snippets(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<SnippetResponse>>> {
    let service = SnippetService::new(state.service_context());
    let response = service.list(page).await?;
    Ok(Json(response))
}

/// Create a snippet owned by the caller
///
/// POST /snippets/
pub async fn create_snippet(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ValidatedJson(request): ValidatedJson<CreateSnippetRequest>,
) -> ApiResult<Created<Json<SnippetResponse>>> {
    let service = SnippetService::new(state.service_context());
    let response = service.create(&actor, request).await?;
    Ok(Created(Json(response)))
}

/// Get a snippet
///
/// GET /snippets/{id}/
pub async fn get_snippet(
    State(state): State<AppState>,
    IdPath(snippet_id): IdPath,
) -> ApiResult<Json<SnippetResponse>> {
    let service = SnippetService::new(state.service_context());
    let response = service.get(snippet_id).await?;
    Ok(Json(response))
}

/// Replace a snippet
///
/// PUT /snippets/{id}/
pub async fn replace_snippet(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    IdPath(snippet_id): IdPath,
    ValidatedJson(request): ValidatedJson<ReplaceSnippetRequest>,
) -> ApiResult<Json<SnippetResponse>> {
    let service = SnippetService::new(state.service_context());
    let response = service.replace(&actor, snippet_id, request).await?;
    Ok(Json(response))
}

/// Update some fields of a snippet
///
/// PATCH /snippets/{id}/
pub async fn update_snippet(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    IdPath(snippet_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateSnippetRequest>,
) -> ApiResult<Json<SnippetResponse>> {
    let service = SnippetService::new(state.service_context());
    let response = service.update(&actor, snippet_id, request).await?;
    Ok(Json(response))
}

/// Delete a snippet
///
/// DELETE /snippets/{id}/
pub async fn delete_snippet(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    IdPath(snippet_id): IdPath,
) -> ApiResult<NoContent> {
    let service = SnippetService::new(state.service_context());
    service.delete(&actor, snippet_id).await?;
    Ok(NoContent)
}

/// Highlighted HTML rendering of a snippet
///
/// GET /snippets/{id}/highlight/
pub async fn highlight_snippet(
    State(state): State<AppState>,
    IdPath(snippet_id): IdPath,
) -> ApiResult<Html<String>> {
    let service = SnippetService::new(state.service_context());
    let html = service.highlight(snippet_id).await?;
    Ok(Html(html))
}
