use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or compiling the page template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template file could not be read.
    #[error("Cannot read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template source does not compile.
    #[error("Invalid template: {0}")]
    Syntax(#[from] minijinja::Error),
}

/// Errors raised while rendering the page for a request.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to render page: {0}")]
    Template(#[from] minijinja::Error),
}
