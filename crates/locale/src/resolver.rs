use common::{AVAILABLE_LANGUAGES, LanguageCode};

use crate::accept_language::parse_accept_language;

/// Picks the language to serve for a request.
///
/// 1. An explicit `lang` that is exactly one of `supported` wins.
/// 2. Otherwise the first `Accept-Language` entry that starts with one of
///    the available languages decides; q-values are ignored.
/// 3. Otherwise the default language.
pub fn resolve(
    explicit: Option<&str>,
    accept_language: Option<&str>,
    supported: &[&str],
) -> LanguageCode {
    if let Some(explicit) = explicit
        && supported.contains(&explicit)
    {
        return LanguageCode::new(explicit);
    }

    accept_language.and_then(resolve_header).unwrap_or_default()
}

fn resolve_header(header: &str) -> Option<LanguageCode> {
    parse_accept_language(header).iter().find_map(|range| {
        let code = AVAILABLE_LANGUAGES
            .iter()
            .copied()
            .find(|code| range.matches(code))?;
        tracing::debug!(
            tag = %range.tag,
            quality = ?range.quality,
            lang = code,
            "matched Accept-Language entry"
        );
        Some(LanguageCode::new(code))
    })
}
