// tests/e2e_dispatch_logging.rs
use async_trait::async_trait;
use axum::{
    Extension, Router,
    extract::Request,
    http::{Method, StatusCode},
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    routing::any,
};
use play_site::presentation::http::middleware::{locale_middleware, remote_user_middleware};
use play_site::presentation::http::state::HttpState;
use play_site::presentation::http::views::{
    Loggable, LoggedView, View, ViewLogger, ViewName, serve_view,
};
use tower::util::ServiceExt as _;

mod support;

use support::EventCapture;

struct WhoAmI;

impl Loggable for WhoAmI {
    const LOGGER_NAME: Option<&'static str> = Some("site.account");
    const BIND_USER: bool = true;
}

#[async_trait]
impl View for WhoAmI {
    fn from_state(_state: &HttpState) -> Self {
        Self
    }

    async fn handle(&mut self, _request: Request, log: &ViewLogger) -> Response {
        log.name().to_string().into_response()
    }
}

struct Quiet;

impl Loggable for Quiet {
    const LOG_DISPATCH: bool = false;
}

#[async_trait]
impl View for Quiet {
    fn from_state(_state: &HttpState) -> Self {
        Self
    }

    async fn handle(&mut self, _request: Request, _log: &ViewLogger) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

fn router() -> Router {
    let state = support::build_test_state();
    Router::new()
        .route(
            "/me",
            any(serve_view::<WhoAmI>).layer(Extension(ViewName::new("me"))),
        )
        .route("/quiet", any(serve_view::<Quiet>))
        .layer(from_fn_with_state(state.clone(), locale_middleware))
        .layer(from_fn_with_state(state.clone(), remote_user_middleware))
        .layer(Extension(state))
}

#[tokio::test]
async fn bound_user_is_reported_for_authenticated_requests() {
    let (capture, _guard) = EventCapture::install();

    let mut req = support::request(Method::GET, "/me");
    req.headers_mut()
        .insert("x-remote-user", "alice".parse().unwrap());
    let resp = router().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(support::body_text(resp).await, "site.account");

    let dispatches = capture.dispatches();
    assert_eq!(dispatches.len(), 1);
    let event = &dispatches[0];
    assert_eq!(event.field("logger"), Some("site.account"));
    assert_eq!(event.field("class"), Some("WhoAmI"));
    assert_eq!(event.field("username"), Some("alice"));
    assert_eq!(event.field("view_name"), Some("me"));
    assert_eq!(event.field("language"), Some("en-us"));
}

#[tokio::test]
async fn bound_user_is_empty_for_anonymous_requests() {
    let (capture, _guard) = EventCapture::install();

    let resp = router()
        .oneshot(support::request(Method::DELETE, "/me"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let dispatches = capture.dispatches();
    assert_eq!(dispatches.len(), 1);
    assert_eq!(dispatches[0].field("username"), Some(""));
    assert_eq!(dispatches[0].field("method"), Some("DELETE"));
}

#[tokio::test]
async fn disabled_dispatch_logging_emits_nothing() {
    let (capture, _guard) = EventCapture::install();

    let resp = router()
        .oneshot(support::request(Method::GET, "/quiet"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(capture.dispatches().is_empty());
}

#[tokio::test]
async fn unnamed_route_omits_view_name() {
    let (capture, _guard) = EventCapture::install();

    let mut view = LoggedView::new(WhoAmI);
    assert_eq!(view.logger().name(), "site.account");
    view.dispatch(support::request(Method::GET, "/elsewhere"))
        .await;

    let dispatches = capture.dispatches();
    assert_eq!(dispatches.len(), 1);
    assert_eq!(dispatches[0].field("view_name"), None);
    assert_eq!(dispatches[0].field("path"), Some("/elsewhere"));
    // no middleware ran, so the request carries neither user nor language
    assert_eq!(dispatches[0].field("username"), Some(""));
    assert_eq!(dispatches[0].field("language"), None);
}
