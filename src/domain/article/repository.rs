use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleField, ArticleId};
use crate::domain::errors::DomainResult;
use crate::domain::timestamps::SaveOptions;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Insert with `created_date = updated_date = now`.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    async fn insert(&self, article: NewArticle, now: DateTime<Utc>) -> DomainResult<Article>;
    /// Write the fields selected by `options` and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns not found when the row is gone.
    async fn save(
        &self,
        article: Article,
        options: SaveOptions<ArticleField>,
    ) -> DomainResult<Article>;
    /// Delete by id.
    ///
    /// # Errors
    ///
    /// Returns not found when the row is gone.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Look up one article.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Page through articles in the default ordering.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    async fn list(&self, limit: u32, offset: u32) -> DomainResult<Vec<Article>>;
}
