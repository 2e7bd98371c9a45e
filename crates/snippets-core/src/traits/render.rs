//! Syntax highlighting port

use crate::error::DomainError;

/// Input to a render call
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub code: &'a str,
    pub language: &'a str,
    pub style: &'a str,
    pub linenos: bool,
    pub title: &'a str,
}

/// Turns source code into a standalone highlighted HTML document
pub trait CodeRenderer: Send + Sync {
    /// Render `request.code`
    ///
    /// Fails with `UnknownLanguage` or `UnknownStyle` for names the renderer
    /// does not know.
    fn render(&self, request: &RenderRequest<'_>) -> Result<String, DomainError>;

    fn supports_language(&self, language: &str) -> bool;

    fn supports_style(&self, style: &str) -> bool;
}
