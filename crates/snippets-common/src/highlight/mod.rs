//! Syntax highlighting

mod syntect_renderer;

pub use syntect_renderer::SyntectRenderer;
