// tests/support/helpers.rs
use super::mocks::{InMemoryArticleRepo, SteppingClock};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use play_site::application::ports::time::Clock;
use play_site::application::services::ApplicationServices;
use play_site::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use play_site::infrastructure::templates::TemplateEngine;
use play_site::presentation::http::state::{HttpSettings, HttpState};
use serde_json::Value;
use std::sync::Arc;

pub fn test_settings() -> HttpSettings {
    HttpSettings {
        language_code: "en-us".into(),
        languages: vec!["en-us".into(), "de".into(), "fr".into()],
        allowed_origins: vec!["http://localhost:3000".into()],
        ..HttpSettings::default()
    }
}

pub fn build_services(
    repo: Arc<InMemoryArticleRepo>,
    clock: Arc<dyn Clock>,
) -> Arc<ApplicationServices> {
    let write: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read: Arc<dyn ArticleReadRepository> = repo;
    Arc::new(ApplicationServices::new(write, read, clock))
}

pub fn build_test_state_with(repo: Arc<InMemoryArticleRepo>, clock: Arc<dyn Clock>) -> HttpState {
    let templates = TemplateEngine::from_dir("templates").expect("load templates");
    HttpState {
        services: build_services(repo, clock),
        templates: Arc::new(templates),
        settings: Arc::new(test_settings()),
    }
}

pub fn build_test_state() -> HttpState {
    build_test_state_with(
        Arc::new(InMemoryArticleRepo::new()),
        Arc::new(SteppingClock::forward()),
    )
}

pub fn make_test_router() -> axum::Router {
    play_site::presentation::http::routes::build_router(build_test_state())
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected json body")
}

pub async fn body_text(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Assert that a response is an `ErrorResponse` with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    assert_eq!(json["error"].as_str().unwrap_or(""), expected_error);
    assert!(!json["message"].as_str().unwrap_or("").is_empty());
}
