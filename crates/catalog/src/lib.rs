//! Translation catalog for the portfolio service.
//!
//! Loads one JSON document per language from a directory at startup and
//! serves read-only lookups afterwards.

pub mod catalog;
pub mod error;

pub use catalog::{Document, TranslationCatalog};
pub use error::{CatalogError, Result};
