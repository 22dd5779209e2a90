// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleDescription, ArticleField, ArticleId, ArticleOrder, ArticleTitle,
};
use crate::domain::timestamps::{DateFields, Timestamps};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub order: ArticleOrder,
    timestamps: Timestamps,
}

impl Article {
    #[must_use]
    pub const fn from_parts(
        id: ArticleId,
        title: ArticleTitle,
        description: ArticleDescription,
        order: ArticleOrder,
        timestamps: Timestamps,
    ) -> Self {
        Self {
            id,
            title,
            description,
            order,
            timestamps,
        }
    }

    #[must_use]
    pub const fn created_date(&self) -> DateTime<Utc> {
        self.timestamps.created_date()
    }

    #[must_use]
    pub const fn updated_date(&self) -> DateTime<Utc> {
        self.timestamps.updated_date()
    }

    /// Apply a set of field changes and report which fields they touched.
    pub fn apply(&mut self, changes: ArticleChanges) -> Vec<ArticleField> {
        let mut touched = Vec::new();
        if let Some(title) = changes.title {
            self.title = title;
            touched.push(ArticleField::Title);
        }
        if let Some(description) = changes.description {
            self.description = description;
            touched.push(ArticleField::Description);
        }
        if let Some(order) = changes.order {
            self.order = order;
            touched.push(ArticleField::Order);
        }
        touched
    }
}

impl DateFields for Article {
    type Field = ArticleField;
    type Order = ArticleOrder;

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }

    fn order(&self) -> &ArticleOrder {
        &self.order
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub order: ArticleOrder,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleChanges {
    pub title: Option<ArticleTitle>,
    pub description: Option<ArticleDescription>,
    pub order: Option<ArticleOrder>,
}

impl ArticleChanges {
    #[must_use]
    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: ArticleDescription) -> Self {
        self.description = Some(description);
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: ArticleOrder) -> Self {
        self.order = Some(order);
        self
    }
}
