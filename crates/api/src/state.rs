//! Shared application state.

use std::path::PathBuf;
use std::sync::Arc;

use catalog::TranslationCatalog;
use render::PageRenderer;

use crate::config::Config;
use crate::error::StartupError;

/// Read-only state shared by all handlers.
///
/// Constructed once at startup and never mutated, so handlers need no
/// locking.
pub struct AppState {
    pub catalog: TranslationCatalog,
    pub renderer: PageRenderer,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(
        catalog: TranslationCatalog,
        renderer: PageRenderer,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog,
            renderer,
            static_dir: static_dir.into(),
        }
    }

    /// Loads translations and the page template from the configured
    /// directories. Any failure here must keep the server from starting.
    pub fn load(config: &Config) -> Result<Arc<Self>, StartupError> {
        let catalog = TranslationCatalog::load(&config.translations_dir)?;
        let renderer = PageRenderer::load(&config.templates_dir)?;
        Ok(Arc::new(Self::new(
            catalog,
            renderer,
            config.static_dir.clone(),
        )))
    }
}
