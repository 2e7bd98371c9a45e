//! Opaque per-user API token

use chrono::{DateTime, Utc};

/// Length of a token key
pub const API_TOKEN_LENGTH: usize = 40;

/// API token exchanged for credentials, one per user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiToken {
    pub key: String,
    pub user_id: i64,
    pub created: DateTime<Utc>,
}

impl ApiToken {
    pub fn new(key: String, user_id: i64) -> Self {
        Self {
            key,
            user_id,
            created: Utc::now(),
        }
    }
}
