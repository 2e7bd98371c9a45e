//! `CodeRenderer` backed by syntect's bundled syntaxes and themes

use snippets_core::{CodeRenderer, DomainError, RenderRequest};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

/// Renders snippets into standalone HTML documents
///
/// Loading the syntax and theme sets is expensive; build one renderer at
/// startup and share it.
pub struct SyntectRenderer {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl SyntectRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    /// Look up a syntax by name or file extension, case-insensitively
    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        if language.trim().is_empty() {
            return None;
        }
        self.syntaxes.find_syntax_by_token(language).or_else(|| {
            self.syntaxes
                .syntaxes()
                .iter()
                .find(|s| s.name.eq_ignore_ascii_case(language))
        })
    }

    /// Names of the bundled styles
    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.themes.themes.keys().map(String::as_str)
    }
}

impl Default for SyntectRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SyntectRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntectRenderer")
            .field("syntaxes", &self.syntaxes.syntaxes().len())
            .field("themes", &self.themes.themes.len())
            .finish()
    }
}

impl CodeRenderer for SyntectRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> Result<String, DomainError> {
        let syntax = self
            .find_syntax(request.language)
            .ok_or_else(|| DomainError::UnknownLanguage(request.language.to_string()))?;
        let theme = self
            .themes
            .themes
            .get(request.style)
            .ok_or_else(|| DomainError::UnknownStyle(request.style.to_string()))?;

        let body = highlighted_html_for_string(request.code, &self.syntaxes, syntax, theme)
            .map_err(|e| DomainError::RenderError(e.to_string()))?;

        let body = if request.linenos {
            with_line_numbers(request.code, &body)
        } else {
            body
        };

        Ok(document(request.title, &body))
    }

    fn supports_language(&self, language: &str) -> bool {
        self.find_syntax(language).is_some()
    }

    fn supports_style(&self, style: &str) -> bool {
        self.themes.themes.contains_key(style)
    }
}

/// Two-column table: line numbers, then the highlighted block
fn with_line_numbers(code: &str, highlighted: &str) -> String {
    let count = code.lines().count().max(1);
    let numbers = (1..=count)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<table class=\"highlighttable\"><tr>\
         <td class=\"linenos\"><pre>{numbers}</pre></td>\
         <td class=\"code\">{highlighted}</td>\
         </tr></table>\n"
    )
}

fn document(title: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 256);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    if !title.is_empty() {
        html.push_str("<title>");
        html.push_str(&escape_html(title));
        html.push_str("</title>\n");
    }
    html.push_str("</head>\n<body>\n");
    if !title.is_empty() {
        html.push_str("<h2>");
        html.push_str(&escape_html(title));
        html.push_str("</h2>\n");
    }
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
