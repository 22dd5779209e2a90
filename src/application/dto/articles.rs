use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub order: i32,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let created_date = article.created_date();
        let updated_date = article.updated_date();
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            description: article.description.into_inner(),
            order: article.order.value(),
            created_date,
            updated_date,
        }
    }
}
