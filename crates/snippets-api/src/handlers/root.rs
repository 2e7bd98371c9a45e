//! API root

use axum::Json;
use snippets_service::dto::ApiRootResponse;

/// Links to the top-level collections
///
/// GET /
pub async fn api_root() -> Json<ApiRootResponse> {
    Json(ApiRootResponse::default())
}
