//! Snippet entity - a piece of source code with its highlighted rendering

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::traits::{CodeRenderer, RenderRequest};

pub const DEFAULT_LANGUAGE: &str = "python";
pub const DEFAULT_STYLE: &str = "InspiredGitHub";
pub const MAX_TITLE_LENGTH: usize = 100;

/// Stored code snippet
///
/// `highlighted` is derived from the other fields and is refreshed by every
/// constructor and mutator that goes through a [`CodeRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
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

/// Fields supplied when creating a snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    pub title: String,
    pub code: String,
    pub linenos: bool,
    pub language: String,
    pub style: String,
}

impl NewSnippet {
    /// Snippet draft with default title, language and style
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            code: code.into(),
            linenos: false,
            language: DEFAULT_LANGUAGE.to_string(),
            style: DEFAULT_STYLE.to_string(),
        }
    }
}

/// Partial update of a snippet; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetChanges {
    pub title: Option<String>,
    pub code: Option<String>,
    pub linenos: Option<bool>,
    pub language: Option<String>,
    pub style: Option<String>,
}

fn check_title(title: &str) -> Result<(), DomainError> {
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(DomainError::TitleTooLong {
            max: MAX_TITLE_LENGTH,
        });
    }
    Ok(())
}

impl Snippet {
    /// Build an unsaved snippet owned by `owner_id` and render it
    pub fn create(
        owner_id: i64,
        draft: NewSnippet,
        renderer: &dyn CodeRenderer,
    ) -> Result<Self, DomainError> {
        check_title(&draft.title)?;
        let mut snippet = Self {
            id: 0,
            created: Utc::now(),
            title: draft.title,
            code: draft.code,
            linenos: draft.linenos,
            language: draft.language,
            style: draft.style,
            owner_id,
            highlighted: String::new(),
        };
        snippet.refresh_highlight(renderer)?;
        Ok(snippet)
    }

    /// Apply a partial update and re-render
    ///
    /// On error the snippet is left unchanged.
    pub fn apply_changes(
        &mut self,
        changes: SnippetChanges,
        renderer: &dyn CodeRenderer,
    ) -> Result<(), DomainError> {
        let mut next = self.clone();
        if let Some(title) = changes.title {
            check_title(&title)?;
            next.title = title;
        }
        if let Some(code) = changes.code {
            next.code = code;
        }
        if let Some(linenos) = changes.linenos {
            next.linenos = linenos;
        }
        if let Some(language) = changes.language {
            next.language = language;
        }
        if let Some(style) = changes.style {
            next.style = style;
        }
        next.refresh_highlight(renderer)?;
        *self = next;
        Ok(())
    }

    /// Recompute `highlighted` from the current fields
    pub fn refresh_highlight(&mut self, renderer: &dyn CodeRenderer) -> Result<(), DomainError> {
        self.highlighted = renderer.render(&RenderRequest {
            code: &self.code,
            language: &self.language,
            style: &self.style,
            linenos: self.linenos,
            title: &self.title,
        })?;
        Ok(())
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }
}
