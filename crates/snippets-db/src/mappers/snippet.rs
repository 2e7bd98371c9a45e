//! Snippet entity <-> model mapper

use snippets_core::entities::Snippet;

use crate::models::SnippetModel;

impl From<SnippetModel> for Snippet {
    fn from(model: SnippetModel) -> Self {
        Snippet {
            id: model.id,
            created: model.created,
            title: model.title,
            code: model.code,
            linenos: model.linenos,
            language: model.language,
            style: model.style,
            owner_id: model.owner_id,
            highlighted: model.highlighted,
        }
    }
}
