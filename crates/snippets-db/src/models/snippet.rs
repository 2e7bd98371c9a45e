//! Snippet database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for snippets table
#[derive(Debug, Clone, FromRow)]
pub struct SnippetModel {
    pub id: i64,
    pub created: DateTime<Utc>,
    pub title: String,
    pub code: String,
    pub linenos: bool,
    pub language: String,
    pub style: String,
    pub owner_id: i64,
    pub highlighted: String,
}
