//! JSON mirror of the translation documents.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use common::DEFAULT_LANGUAGE;

use super::LangQuery;
use crate::AppState;

/// GET /api/profile — returns the translation document verbatim.
///
/// Unknown or missing `lang` values fall back to English.
#[tracing::instrument(skip(state))]
pub async fn get(State(state): State<Arc<AppState>>, Query(query): Query<LangQuery>) -> Response {
    let requested = query.lang.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    let (lang, document) = state.catalog.get_or_default(requested);
    metrics::counter!("profile_requests_total", "lang" => lang.to_string()).increment(1);

    Json(document).into_response()
}
