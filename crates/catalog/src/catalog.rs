use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use common::LanguageCode;
use serde_json::Value;

use crate::{CatalogError, Result};

/// Profile data for one language, kept as an opaque JSON tree.
pub type Document = Value;

const DOCUMENT_EXTENSION: &str = "json";

/// Immutable mapping from language code to translation document.
///
/// Built once at startup and shared read-only between request handlers.
/// The default language is always present, so [`get_or_default`] never
/// misses.
///
/// [`get_or_default`]: TranslationCatalog::get_or_default
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    documents: BTreeMap<LanguageCode, Document>,
}

impl TranslationCatalog {
    /// Loads every `*.json` file in `dir`, keyed by file stem.
    ///
    /// Entries that are not regular files with a `.json` extension are
    /// skipped. Any unreadable or malformed document aborts the load.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|source| CatalogError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| CatalogError::DirectoryUnreadable {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if is_document(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(CatalogError::Empty(dir.to_path_buf()));
        }

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let code = language_code_for(&path)?;
            let document = read_document(&path)?;
            tracing::debug!(lang = %code, path = %path.display(), "loaded translation document");
            documents.push((code, document));
        }

        let catalog = Self::from_documents(documents)?;
        tracing::info!(
            dir = %dir.display(),
            languages = ?catalog.codes(),
            "translation catalog loaded"
        );
        Ok(catalog)
    }

    /// Builds a catalog from in-memory documents.
    ///
    /// Codes are kept exactly as given. Later entries replace earlier ones
    /// with the same code.
    pub fn from_documents<C, I>(documents: I) -> Result<Self>
    where
        C: Into<LanguageCode>,
        I: IntoIterator<Item = (C, Document)>,
    {
        let documents: BTreeMap<LanguageCode, Document> = documents
            .into_iter()
            .map(|(code, document)| (code.into(), document))
            .collect();

        let default = LanguageCode::default_language();
        if !documents.contains_key(&default) {
            return Err(CatalogError::MissingDefault(default));
        }

        Ok(Self { documents })
    }

    /// Returns the document for `code`, if one was loaded.
    ///
    /// Lookup is exact: `"RU"` does not find `ru.json`.
    pub fn get(&self, code: &str) -> Option<&Document> {
        self.documents.get(code)
    }

    /// Returns the document for `code`, falling back to the default language.
    ///
    /// The returned code names the document actually served.
    pub fn get_or_default(&self, code: &str) -> (LanguageCode, &Document) {
        if let Some((requested, document)) = self.documents.get_key_value(code) {
            return (requested.clone(), document);
        }

        let default = LanguageCode::default_language();
        let document = &self.documents[&default];
        (default, document)
    }

    /// Returns the loaded language codes in sorted order.
    pub fn codes(&self) -> Vec<&str> {
        self.documents.keys().map(LanguageCode::as_str).collect()
    }
}

fn is_document(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
}

fn language_code_for(path: &Path) -> Result<LanguageCode> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(LanguageCode::new)
        .ok_or_else(|| CatalogError::InvalidFileName(path.to_path_buf()))
}

fn read_document(path: &Path) -> Result<Document> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CatalogError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
