use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Code of the language served when nothing else matches.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Languages offered by the language switcher, in display order.
pub const AVAILABLE_LANGUAGES: [&str; 2] = ["en", "ru"];

/// Language identifier, e.g. `"en"` or `"ru"`.
///
/// Wraps a `String` so catalog keys and resolved request languages cannot
/// be confused with arbitrary user input. Codes are compared exactly as
/// written; `"RU"` and `"ru"` are different codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Creates a language code from its exact spelling.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the default language code (`"en"`).
    pub fn default_language() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::default_language()
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
