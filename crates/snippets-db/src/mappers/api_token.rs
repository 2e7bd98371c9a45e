//! API token entity <-> model mapper

use snippets_core::entities::ApiToken;

use crate::models::ApiTokenModel;

impl From<ApiTokenModel> for ApiToken {
    fn from(model: ApiTokenModel) -> Self {
        ApiToken {
            key: model.key,
            user_id: model.user_id,
            created: model.created,
        }
    }
}
