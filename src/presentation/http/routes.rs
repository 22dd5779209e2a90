// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::articles::{self, ArticleApi},
    middleware::{locale_middleware, remote_user_middleware},
    openapi::{self, StatusResponse},
    views::{AboutView, Loggable, ViewName, log_dispatch, serve_view},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::{MethodRouter, any, get},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState) -> Router {
    let origins: Vec<HeaderValue> = state
        .settings
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let api = Router::new()
        .route(
            "/api/v1/articles",
            logged::<ArticleApi>(
                get(articles::list_articles).post(articles::create_article),
                "article-list",
            ),
        )
        .route(
            "/api/v1/articles/{id}",
            logged::<ArticleApi>(
                get(articles::get_article)
                    .put(articles::update_article)
                    .patch(articles::patch_article)
                    .delete(articles::delete_article),
                "article-detail",
            ),
        )
        .layer(cors);

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/about", named(any(serve_view::<AboutView>), "about"))
        .merge(api)
        .layer(from_fn_with_state(state.clone(), locale_middleware))
        .layer(from_fn_with_state(state.clone(), remote_user_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

/// Attach the route name seen by dispatch logging as `view_name`.
fn named(route: MethodRouter, name: &'static str) -> MethodRouter {
    route.layer(Extension(ViewName::new(name)))
}

/// Run plain handlers through the dispatch-logging pipeline of `T`.
fn logged<T: Loggable + 'static>(route: MethodRouter, name: &'static str) -> MethodRouter {
    named(route.layer(from_fn(log_dispatch::<T>)), name)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
