use std::fs;
use std::path::Path;

use common::{AVAILABLE_LANGUAGES, LanguageCode};
use minijinja::{Environment, context};
use serde_json::Value;

use crate::{RenderError, TemplateError};

/// File name of the job card template inside the templates directory.
///
/// The `.html` suffix also turns on HTML auto-escaping.
pub const PAGE_TEMPLATE: &str = "job_card.html";

/// Renders the job card page for one language.
///
/// The template sees three variables: `t` (the translation document),
/// `lang` (the language being served) and `available_langs` (the
/// languages offered by the switcher).
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compiles the page template from source.
    pub fn from_source(source: impl Into<String>) -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        env.add_template_owned(PAGE_TEMPLATE, source.into())?;
        Ok(Self { env })
    }

    /// Loads and compiles [`PAGE_TEMPLATE`] from `templates_dir`.
    pub fn load(templates_dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = templates_dir.as_ref().join(PAGE_TEMPLATE);
        let source = fs::read_to_string(&path).map_err(|source| TemplateError::Io {
            path: path.clone(),
            source,
        })?;
        let renderer = Self::from_source(source)?;
        tracing::info!(path = %path.display(), "page template loaded");
        Ok(renderer)
    }

    /// Renders the page for `lang` using `document` as the translation data.
    pub fn render(&self, lang: &LanguageCode, document: &Value) -> Result<String, RenderError> {
        let template = self.env.get_template(PAGE_TEMPLATE)?;
        let html = template.render(context! {
            t => document,
            lang => lang.as_str(),
            available_langs => AVAILABLE_LANGUAGES,
        })?;
        Ok(html)
    }
}
