//! Route handlers.

pub mod health;
pub mod metrics;
pub mod page;
pub mod profile;

use serde::Deserialize;

/// Query string accepted by the page and profile routes.
#[derive(Debug, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}
