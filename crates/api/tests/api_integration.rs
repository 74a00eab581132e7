//! Integration tests for the portfolio server.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use api::AppState;
use api::config::Config;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use catalog::TranslationCatalog;
use metrics_exporter_prometheus::PrometheusHandle;
use render::PageRenderer;
use serde_json::json;
use tempfile::TempDir;
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

const PAGE: &str = r#"<html lang="{{ lang }}"><h1>{{ t.name }}</h1>{% for code in available_langs %}<a{% if code == lang %} class="active"{% endif %}>{{ code }}</a>{% endfor %}</html>"#;

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn sample_catalog() -> TranslationCatalog {
    TranslationCatalog::from_documents([
        ("en", json!({ "name": "Magallan", "title": "Software Engineer" })),
        ("ru", json!({ "name": "Магаллан", "title": "Инженер-программист" })),
    ])
    .unwrap()
}

fn static_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css/style.css"), "body { margin: 0; }").unwrap();
    dir
}

fn setup_with(catalog: TranslationCatalog, template: &str) -> (axum::Router, TempDir) {
    let assets = static_dir();
    let renderer = PageRenderer::from_source(template).unwrap();
    let state = Arc::new(AppState::new(catalog, renderer, assets.path()));
    (api::create_app(state, get_metrics_handle()), assets)
}

fn setup() -> (axum::Router, TempDir) {
    setup_with(sample_catalog(), PAGE)
}

async fn send(
    app: &axum::Router,
    request: Request<Body>,
) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_language(uri: &str, accept_language: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::ACCEPT_LANGUAGE, accept_language)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _assets) = setup();

    let (status, content_type, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        body,
        br#"{"status":"healthy","service":"magallan-portfolio"}"#.to_vec()
    );
}

#[tokio::test]
async fn test_health_check_ignores_catalog_contents() {
    let catalog = TranslationCatalog::from_documents([("en", json!({}))]).unwrap();
    let (app, _assets) = setup_with(catalog, "");

    let (status, _, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        json!({ "status": "healthy", "service": "magallan-portfolio" })
    );
}

#[tokio::test]
async fn test_profile_defaults_to_english() {
    let (app, _assets) = setup();

    let (status, content_type, body) = send(&app, get("/api/profile")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["name"], "Magallan");
}

#[tokio::test]
async fn test_profile_returns_requested_language() {
    let (app, _assets) = setup();

    let (status, _, body) = send(&app, get("/api/profile?lang=ru")).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        json!({ "name": "Магаллан", "title": "Инженер-программист" })
    );
}

#[tokio::test]
async fn test_profile_unknown_language_matches_english() {
    let (app, _assets) = setup();

    let (_, _, unknown) = send(&app, get("/api/profile?lang=xx")).await;
    let (_, _, english) = send(&app, get("/api/profile?lang=en")).await;

    assert_eq!(unknown, english);
}

#[tokio::test]
async fn test_profile_language_is_case_sensitive() {
    let (app, _assets) = setup();

    let (_, _, upper) = send(&app, get("/api/profile?lang=RU")).await;
    let (_, _, english) = send(&app, get("/api/profile?lang=en")).await;

    assert_eq!(upper, english);
}

#[tokio::test]
async fn test_profile_ignores_accept_language() {
    let (app, _assets) = setup();

    let (_, _, body) = send(&app, get_with_language("/api/profile", "ru-RU,ru")).await;

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["name"], "Magallan");
}

#[tokio::test]
async fn test_page_defaults_to_english() {
    let (app, _assets) = setup();

    let (status, content_type, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    let html = String::from_utf8(body).unwrap();
    assert!(html.starts_with(r#"<html lang="en"><h1>Magallan</h1>"#));
    assert!(html.contains(r#"<a class="active">en</a><a>ru</a>"#));
}

#[tokio::test]
async fn test_page_uses_accept_language() {
    let (app, _assets) = setup();

    let request = get_with_language("/", "ru-RU,ru;q=0.9,en;q=0.8");
    let (_, _, body) = send(&app, request).await;

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<h1>Магаллан</h1>"));
    assert!(html.contains(r#"<a>en</a><a class="active">ru</a>"#));
}

#[tokio::test]
async fn test_page_unmatched_header_defaults_to_english() {
    let (app, _assets) = setup();

    let (_, _, body) = send(&app, get_with_language("/", "fr-FR,de;q=0.9")).await;

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains(r#"<html lang="en">"#));
}

#[tokio::test]
async fn test_page_query_overrides_header() {
    let (app, _assets) = setup();

    let (_, _, body) = send(&app, get_with_language("/?lang=en", "ru-RU,ru")).await;

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<h1>Magallan</h1>"));
}

#[tokio::test]
async fn test_page_unsupported_query_ignores_header() {
    let (app, _assets) = setup();

    for uri in ["/?lang=xx", "/?lang=", "/?lang=RU"] {
        let (status, _, body) = send(&app, get_with_language(uri, "ru")).await;

        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains(r#"<html lang="en">"#), "wrong language for {uri}");
    }
}

#[tokio::test]
async fn test_page_header_language_missing_from_catalog_falls_back() {
    let catalog =
        TranslationCatalog::from_documents([("en", json!({ "name": "Magallan" }))]).unwrap();
    let (app, _assets) = setup_with(catalog, PAGE);

    let (status, _, body) = send(&app, get_with_language("/", "ru")).await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains(r#"<html lang="en"><h1>Magallan</h1>"#));
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let (app, _assets) = setup();

    for uri in ["/", "/?lang=ru", "/api/profile", "/api/profile?lang=ru", "/health"] {
        let (_, _, first) = send(&app, get(uri)).await;
        let (_, _, second) = send(&app, get(uri)).await;
        assert_eq!(first, second, "responses differ for {uri}");
    }
}

#[tokio::test]
async fn test_render_failure_is_internal_error() {
    let (app, _assets) = setup_with(sample_catalog(), "{{ t.name + 1 }}");

    let (status, _, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("unsupported types")
    );
}

#[tokio::test]
async fn test_scalar_loop_source_renders() {
    let catalog =
        TranslationCatalog::from_documents([("en", json!({ "skills": "Rust" }))]).unwrap();
    let (app, _assets) = setup_with(catalog, "{% for s in t.skills %}{{ s }};{% endfor %}");

    let (status, _, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"R;u;s;t;".to_vec());
}

#[tokio::test]
async fn test_static_file_is_served() {
    let (app, _assets) = setup();

    let (status, content_type, body) = send(&app, get("/static/css/style.css")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/css"));
    assert_eq!(body, b"body { margin: 0; }".to_vec());
}

#[tokio::test]
async fn test_missing_static_file_is_not_found() {
    let (app, _assets) = setup();

    let (status, _, _) = send(&app, get("/static/fonts/missing.woff2")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (app, _assets) = setup();

    let (status, _, _) = send(&app, get("/admin")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let (app, _assets) = setup();
    send(&app, get("/api/profile?lang=ru")).await;

    let (status, content_type, _) = send(&app, get("/metrics")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
}

#[tokio::test]
async fn test_shipped_assets_load_and_render() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..");
    let config = Config {
        translations_dir: root.join("translations"),
        templates_dir: root.join("templates"),
        static_dir: root.join("static"),
        ..Config::default()
    };
    let state = AppState::load(&config).unwrap();
    assert_eq!(state.catalog.codes(), vec!["en", "ru"]);
    let app = api::create_app(state, get_metrics_handle());

    let (status, _, body) = send(&app, get("/?lang=ru")).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains(r#"<html lang="ru">"#));
    assert!(html.contains("Магаллан"));

    let (status, _, _) = send(&app, get("/static/css/style.css")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_load_fails_on_malformed_translation() {
    let translations = tempfile::tempdir().unwrap();
    std::fs::write(translations.path().join("en.json"), "{ not json").unwrap();
    let config = Config {
        translations_dir: translations.path().to_path_buf(),
        ..Config::default()
    };

    let err = AppState::load(&config).err().unwrap();

    assert!(matches!(err, api::error::StartupError::Catalog(_)));
}
