//! Minimal `Accept-Language` header parser.

/// One entry of an `Accept-Language` header, e.g. `ru-RU;q=0.9`.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
    /// Lowercased language tag without parameters (`"ru-ru"`).
    pub tag: String,
    /// Parsed `q` parameter, if present and well formed. Logged, not ranked.
    pub quality: Option<f32>,
}

impl LanguageRange {
    /// Returns `true` if the tag starts with `code`.
    ///
    /// Matching is by prefix, so `"en-gb"` matches `"en"`.
    pub fn matches(&self, code: &str) -> bool {
        !code.is_empty() && self.tag.starts_with(code)
    }
}

/// Splits a header value into language ranges in header order.
///
/// Quality values are parsed but never used for ordering. Empty entries
/// are skipped.
pub fn parse_accept_language(header: &str) -> Vec<LanguageRange> {
    header
        .split(',')
        .filter_map(|part| {
            let mut components = part.split(';');
            let tag = components.next()?.trim().to_ascii_lowercase();
            if tag.is_empty() {
                return None;
            }
            let quality = components.find_map(parse_quality);
            Some(LanguageRange { tag, quality })
        })
        .collect()
}

fn parse_quality(param: &str) -> Option<f32> {
    let (key, value) = param.split_once('=')?;
    if !key.trim().eq_ignore_ascii_case("q") {
        return None;
    }
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|q| (0.0..=1.0).contains(q))
}
