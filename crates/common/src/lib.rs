//! Shared language types for the portfolio service.

pub mod types;

pub use types::{AVAILABLE_LANGUAGES, DEFAULT_LANGUAGE, LanguageCode};
