//! API token database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for api_tokens table
#[derive(Debug, Clone, FromRow)]
pub struct ApiTokenModel {
    pub key: String,
    pub user_id: i64,
    pub created: DateTime<Utc>,
}
