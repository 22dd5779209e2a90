// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleDescription, ArticleField, ArticleId, ArticleOrder, ArticleReadRepository,
    ArticleTitle, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::timestamps::{DateFields, SaveOptions, Timestamps};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, description, sort_order, created_date, updated_date";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    description: String,
    sort_order: i32,
    created_date: DateTime<Utc>,
    updated_date: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self::from_parts(
            ArticleId::new(row.id)?,
            ArticleTitle::new(row.title)?,
            ArticleDescription::new(row.description),
            ArticleOrder::new(row.sort_order),
            Timestamps::restore(row.created_date, row.updated_date)?,
        ))
    }
}

fn push_assignment<'a>(builder: &mut QueryBuilder<'a, Postgres>, article: &'a Article, field: ArticleField) {
    builder.push(field.column());
    builder.push(" = ");
    match field {
        ArticleField::Title => {
            builder.push_bind(article.title.as_str());
        }
        ArticleField::Description => {
            builder.push_bind(article.description.as_str());
        }
        ArticleField::Order => {
            builder.push_bind(article.order.value());
        }
        ArticleField::UpdatedDate => {
            // never behind the stored value, which already satisfies the CHECK
            builder.push("GREATEST(");
            builder.push_bind(article.timestamps().updated_date());
            builder.push(", updated_date)");
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle, now: DateTime<Utc>) -> DomainResult<Article> {
        let NewArticle {
            title,
            description,
            order,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, description, sort_order, created_date, updated_date)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(order.value())
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn save(
        &self,
        article: Article,
        options: SaveOptions<ArticleField>,
    ) -> DomainResult<Article> {
        if options.is_noop() {
            return Ok(article);
        }

        let fields: Vec<ArticleField> = ArticleField::ALL
            .into_iter()
            .filter(|field| options.writes(*field))
            .collect();

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE articles SET ");
        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                builder.push(", ");
            }
            push_assignment(&mut builder, &article, *field);
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(article.id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("article not found"))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("article not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, limit: u32, offset: u32) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             ORDER BY sort_order DESC, created_date DESC, id DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
