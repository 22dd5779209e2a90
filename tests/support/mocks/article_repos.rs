// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use play_site::domain::article::{
    Article, ArticleField, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use play_site::domain::errors::{DomainError, DomainResult};
use play_site::domain::timestamps::{SaveOptions, Timestamps, default_ordering};
use std::sync::Mutex;

/// Article store with the same write semantics as the Postgres repository:
/// only the selected fields are written and `created_date` is never changed.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    rows: Mutex<Vec<Article>>,
    next_id: Mutex<i64>,
    saves: Mutex<Vec<SaveOptions<ArticleField>>>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options passed to every `save` call so far.
    pub fn recorded_saves(&self) -> Vec<SaveOptions<ArticleField>> {
        self.saves.lock().unwrap().clone()
    }

    pub fn stored(&self, id: i64) -> Option<Article> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| i64::from(row.id) == id)
            .cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle, now: DateTime<Utc>) -> DomainResult<Article> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        let stored = Article::from_parts(
            ArticleId::new(id)?,
            article.title,
            article.description,
            article.order,
            Timestamps::new(now),
        );
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn save(
        &self,
        article: Article,
        options: SaveOptions<ArticleField>,
    ) -> DomainResult<Article> {
        self.saves.lock().unwrap().push(options.clone());
        if options.is_noop() {
            return Ok(article);
        }

        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == article.id)
            .ok_or_else(|| DomainError::not_found("article not found"))?;

        let title = if options.writes(ArticleField::Title) {
            article.title.clone()
        } else {
            row.title.clone()
        };
        let description = if options.writes(ArticleField::Description) {
            article.description.clone()
        } else {
            row.description.clone()
        };
        let order = if options.writes(ArticleField::Order) {
            article.order
        } else {
            row.order
        };
        let updated_date = if options.writes(ArticleField::UpdatedDate) {
            article.updated_date().max(row.updated_date())
        } else {
            row.updated_date()
        };

        *row = Article::from_parts(
            row.id,
            title,
            description,
            order,
            Timestamps::restore(row.created_date(), updated_date)?,
        );
        Ok(row.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DomainError::not_found("article not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.stored(id.into()))
    }

    async fn list(&self, limit: u32, offset: u32) -> DomainResult<Vec<Article>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| default_ordering(a, b).then_with(|| b.id.cmp(&a.id)));
        Ok(rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}
