//! User entity <-> model mapper

use snippets_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            is_staff: model.is_staff,
            is_active: model.is_active,
            is_deleted: model.is_deleted,
            deleted_at: model.deleted_at,
            date_joined: model.date_joined,
        }
    }
}
