// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleDescription, ArticleOrder, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub order: i32,
}

impl CreateArticleCommand {
    #[must_use]
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    description: String,
    order: i32,
}

impl CreateArticleCommandBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Finish the command.
    ///
    /// # Errors
    ///
    /// Fails when no title was set.
    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            description: self.description,
            order: self.order,
        })
    }
}

impl ArticleCommandService {
    /// Insert a new article stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid title.
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let new_article = NewArticle {
            title: ArticleTitle::new(command.title)?,
            description: ArticleDescription::new(command.description),
            order: ArticleOrder::new(command.order),
        };

        let created = self.write_repo.insert(new_article, self.clock.now()).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
