// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleChanges, ArticleDescription, ArticleId, ArticleOrder, ArticleTitle},
        timestamps::SaveOptions,
    },
};

/// Replace every editable field and save the whole row.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub order: i32,
}

/// Change only the supplied fields and save just those.
pub struct PatchArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub order: Option<i32>,
}

impl ArticleCommandService {
    /// Replace every editable field.
    ///
    /// # Errors
    ///
    /// Returns a validation error for invalid values and not found
    /// for unknown ids.
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let changes = ArticleChanges::default()
            .with_title(ArticleTitle::new(command.title)?)
            .with_description(ArticleDescription::new(command.description))
            .with_order(ArticleOrder::new(command.order));

        let mut article = self.load(id).await?;
        article.apply(changes);

        let saved = self.persist(article, SaveOptions::full()).await?;
        Ok(saved.into())
    }

    /// Change only the fields named by the command.
    ///
    /// # Errors
    ///
    /// Returns a validation error for invalid values and not found
    /// for unknown ids.
    pub async fn patch_article(&self, command: PatchArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let changes = ArticleChanges {
            title: command.title.map(ArticleTitle::new).transpose()?,
            description: command.description.map(ArticleDescription::new),
            order: command.order.map(ArticleOrder::new),
        };

        let mut article = self.load(id).await?;
        let touched = article.apply(changes);
        if touched.is_empty() {
            return Ok(article.into());
        }

        let saved = self.persist(article, SaveOptions::only(touched)).await?;
        Ok(saved.into())
    }
}
