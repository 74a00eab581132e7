//! Job card page endpoint.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::http::header::ACCEPT_LANGUAGE;
use axum::response::Html;

use super::LangQuery;
use crate::AppState;
use crate::error::ApiError;

/// GET / — renders the job card in the negotiated language.
///
/// When `lang` is present it alone decides: a loaded language is served,
/// anything else falls back to English. Only requests without `lang`
/// consult the `Accept-Language` header.
#[tracing::instrument(skip(state, headers))]
pub async fn show(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, ApiError> {
    let accept_language = match query.lang {
        Some(_) => None,
        None => headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok()),
    };
    let supported = state.catalog.codes();
    let resolved = locale::resolve(query.lang.as_deref(), accept_language, &supported);

    let (lang, document) = state.catalog.get_or_default(resolved.as_str());
    tracing::debug!(%lang, "rendering job card");
    metrics::counter!("page_views_total", "lang" => lang.to_string()).increment(1);

    let html = state.renderer.render(&lang, document)?;
    Ok(Html(html))
}
