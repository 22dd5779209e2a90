// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{Article, ArticleField, ArticleId, ArticleReadRepository, ArticleWriteRepository},
        timestamps::{SaveOptions, save_with_timestamps},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    #[must_use]
    pub const fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    pub(super) async fn load(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// Every article write funnels through here so `updated_date` is kept.
    pub(super) async fn persist(
        &self,
        article: Article,
        options: SaveOptions<ArticleField>,
    ) -> ApplicationResult<Article> {
        let repo = Arc::clone(&self.write_repo);
        let saved = save_with_timestamps(article, options, self.clock.now(), |article, options| {
            async move {
                tracing::debug!(
                    article_id = %article.id,
                    fields = ?options.update_fields(),
                    "saving article"
                );
                repo.save(article, options).await
            }
        })
        .await?;
        Ok(saved)
    }
}
