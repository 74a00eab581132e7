use std::path::PathBuf;

use thiserror::Error;

use common::LanguageCode;

/// Errors raised while loading the translation catalog.
///
/// All of these are fatal at startup: a process that fails to build its
/// catalog must not serve traffic.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The translations directory could not be listed.
    #[error("Cannot read translations directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A translation file could not be read.
    #[error("Cannot read translation file {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A translation file is not valid JSON.
    #[error("Invalid JSON in translation file {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A translation file name cannot be used as a language code.
    #[error("Translation file name is not valid UTF-8: {0}")]
    InvalidFileName(PathBuf),

    /// No translation documents were found.
    #[error("No translation documents found in {0}")]
    Empty(PathBuf),

    /// The fallback language has no document.
    #[error("Default language '{0}' is missing from the catalog")]
    MissingDefault(LanguageCode),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
