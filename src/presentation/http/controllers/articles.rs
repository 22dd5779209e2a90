// src/presentation/http/controllers/articles.rs
use crate::application::{
    ApplicationResult,
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, PatchArticleCommand, UpdateArticleCommand,
    },
    dto::ArticleDto,
    error::ApplicationError,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::domain::article::ArticleField;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::ArticleListResponse;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::Loggable;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

/// Dispatch-logging profile shared by the article endpoints.
pub struct ArticleApi;

impl Loggable for ArticleApi {
    const BIND_USER: bool = true;
    const LANGUAGE: bool = false;
}

const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ArticleListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: i32,
}

/// Only the fields present are saved.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PatchArticleRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub order: Option<i32>,
}

impl PatchArticleRequest {
    /// Every key of `body` must name an editable article field.
    fn from_body(body: Map<String, Value>) -> ApplicationResult<Self> {
        for key in body.keys() {
            ArticleField::editable(key)?;
        }
        serde_json::from_value(Value::Object(body))
            .map_err(|err| ApplicationError::validation(err.to_string()))
    }
}

/// List articles in the default ordering.
///
/// # Errors
///
/// Fails when the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles ordered by -order, -created_date.", body = ArticleListResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

/// Fetch one article.
///
/// # Errors
///
/// Responds 404 for unknown ids.
#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

/// Create an article.
///
/// # Errors
///
/// Responds 400 for invalid values.
#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid field value.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        description: payload.description,
        order: payload.order,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

/// Replace every editable field of an article.
///
/// # Errors
///
/// Responds 400 for invalid values and 404 for unknown ids.
#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 400, description = "Invalid field value.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        description: payload.description,
        order: payload.order,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

/// Change only the supplied fields of an article.
///
/// # Errors
///
/// Responds 400 for invalid or non-editable keys and 404 for unknown ids.
#[utoipa::path(
    patch,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = PatchArticleRequest,
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 400, description = "Invalid field value.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn patch_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(body): Json<Map<String, Value>>,
) -> HttpResult<Json<ArticleDto>> {
    let payload = PatchArticleRequest::from_body(body).into_http()?;
    let command = PatchArticleCommand {
        id,
        title: payload.title,
        description: payload.description,
        order: payload.order,
    };

    state
        .services
        .article_commands
        .patch_article(command)
        .await
        .into_http()
        .map(Json)
}

/// Delete an article.
///
/// # Errors
///
/// Responds 404 for unknown ids.
#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
